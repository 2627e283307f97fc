mod registry;

pub use registry::{
    format_locale_number, get_locale, normalize_locale_id, BuiltinLocales, NumberLocale,
    SeparatorError, SeparatorResolver, Separators, DE_CH, DE_DE, EN_GB, EN_US, ES_ES, ES_MX,
    FR_CH, FR_FR, IT_CH, IT_IT, MAX_FRACTION_DIGITS,
};
