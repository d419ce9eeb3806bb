use crate::models::{Gender, RiskLevel};

/// Map a patient's age, gender and distinct trigger count to a risk tier
///
/// Rules are evaluated in order and the first match wins:
/// 1. No trigger at all            -> NONE
/// 2. Male <30 with >=5, female <30 with >=7, anyone >=30 with >=8 -> EARLY_ONSET
/// 3. Male <30 with >=3, female <30 with >=4, anyone >=30 with >=6 -> IN_DANGER
/// 4. Older than 30 (strictly) with 2 to 5 triggers -> BORDERLINE
/// 5. Otherwise                    -> NONE
///
/// `Gender::Unknown` never matches the under-30 branches.
pub fn classify(age: u32, gender: Gender, trigger_count: usize) -> RiskLevel {
    if trigger_count == 0 {
        return RiskLevel::None;
    }

    let is_male = gender == Gender::Male;
    let is_female = gender == Gender::Female;
    let under_30 = age < 30;

    if (is_male && under_30 && trigger_count >= 5)
        || (is_female && under_30 && trigger_count >= 7)
        || (!under_30 && trigger_count >= 8)
    {
        return RiskLevel::EarlyOnset;
    }

    if (is_male && under_30 && trigger_count >= 3)
        || (is_female && under_30 && trigger_count >= 4)
        || (!under_30 && trigger_count >= 6)
    {
        return RiskLevel::InDanger;
    }

    // Strictly over 30, unlike the >=30 branches above; a 30 year old never
    // lands in BORDERLINE.
    if age > 30 && (2..=5).contains(&trigger_count) {
        return RiskLevel::Borderline;
    }

    RiskLevel::None
}
