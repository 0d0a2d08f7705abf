//! Look up the issuer of a card number

use crate::cli::app::DisplayOptions;
use cardcheck::CardValidator;
use cardcheck::output::IssuerResult;

/// Print the issuer of `number`, or an empty line if it is not valid
pub fn issuer(number: &str, display: DisplayOptions) {
    let card = CardValidator::new(number);
    let result = IssuerResult {
        number: if display.mask {
            card.number().masked()
        } else {
            card.number().as_str().to_string()
        },
        issuer: card.issuer().to_string(),
    };
    result.render(display.mode);
}
