pub mod list;

use contracts::domain::operations::OperationType;
use thaw::BadgeColor;

/// Badge color of a journal entry. Repairs and reforms stand out from the
/// routine stock movements.
pub fn operation_badge_color(operation_type: OperationType) -> BadgeColor {
    match operation_type {
        OperationType::Arrival => BadgeColor::Success,
        OperationType::Distribution => BadgeColor::Brand,
        OperationType::Reparation => BadgeColor::Warning,
        OperationType::Reversement => BadgeColor::Informative,
        OperationType::Reforme => BadgeColor::Danger,
    }
}
