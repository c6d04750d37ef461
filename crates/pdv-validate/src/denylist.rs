//! Values that are always rejected, however well-formed they are.

/// Occupations that are never accepted.
pub const OCCUPATION_DENYLIST: &[&str] = &["Монах", "Маг", "Паладин", "Кодер"];

/// Political statements that are never accepted.
pub const POLITICAL_VIEWS_DENYLIST: &[&str] = &[
    "поддерживает Имперский легион",
    "патриот независимой Темерии",
    "поддерживает Братьев Бури",
    "согласен с действиями Гарроша Адского Крика на посту вождя Орды",
];

/// Belief systems that are never accepted.
pub const WORLDVIEW_DENYLIST: &[&str] = &[
    "Культ Вечного Огня",
    "Культ богини Мелитэле",
    "Культ пророка Лебеды",
    "Культ Механикус",
    "Храм Трибунала",
    "Девять божеств",
    "Культ проклятых",
    "Светское гачимученничество",
];

/// Exact, case-sensitive membership test.
pub fn is_denied(list: &[&str], value: &str) -> bool {
    list.contains(&value)
}
