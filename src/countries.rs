//! Country names and ISO 3166-1 alpha-2 codes used by the dashboard.
//!
//! The statistics API identifies production countries by code while the
//! country selector shows English names, so lookups go both ways.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Production countries present in the statistics dataset.
pub const COUNTRY_CODES: &[&str] = &[
    "MA", "BT", "UA", "GI", "QA", "AW", "VN", "IQ", "MQ", "CY", "ZW", "CZ",
    "FR", "SE", "LK", "AO", "HU", "PL", "PA", "ZA", "ML", "SG", "ES", "MC",
    "MT", "CD", "UY", "AM", "KP", "ME", "TZ", "AR", "BG", "FI", "MR", "MX",
    "ET", "LV", "CU", "UM", "SA", "TT", "BE", "SN", "MO", "KW", "RO", "KH",
    "LR", "PK", "GB", "BB", "BO", "AE", "LY", "TF", "CA", "RS", "TJ", "AZ",
    "NI", "GN", "AT", "GT", "PG", "CG", "KR", "AL", "IT", "LU", "GE", "GR",
    "KG", "BM", "EG", "UZ", "IE", "ID", "KE", "TN", "DK", "AU", "VE", "HK",
    "CH", "RU", "NL", "CL", "MD", "DE", "PS", "IL", "NZ", "LT", "PR", "BY",
    "KY", "GH", "PE", "BW", "BR", "BD", "CM", "SO", "DO", "CR", "CO", "PH",
    "NO", "RW", "BF", "TD", "BN", "AQ", "IN", "WS", "LB", "DZ", "MM", "IR",
    "MN", "PY", "SV", "SI", "BS", "NP", "IS", "EC", "PF", "HN", "KZ", "BA",
    "CI", "EE", "US", "AF", "MK", "TR", "TW", "LI", "CN", "MY", "PT", "JM",
    "NA", "NG", "UG", "SK", "TH", "MG", "SY", "JO", "LA", "HR", "JP",
];

/// (name, code) pairs, sorted by name.
const COUNTRY_TABLE: &[(&str, &str)] = &[
    ("Afghanistan", "AF"),
    ("Albania", "AL"),
    ("Algeria", "DZ"),
    ("Angola", "AO"),
    ("Antarctica", "AQ"),
    ("Argentina", "AR"),
    ("Armenia", "AM"),
    ("Aruba", "AW"),
    ("Australia", "AU"),
    ("Austria", "AT"),
    ("Azerbaijan", "AZ"),
    ("Bahamas", "BS"),
    ("Bangladesh", "BD"),
    ("Barbados", "BB"),
    ("Belarus", "BY"),
    ("Belgium", "BE"),
    ("Bermuda", "BM"),
    ("Bhutan", "BT"),
    ("Bolivia", "BO"),
    ("Bosnia and Herzegovina", "BA"),
    ("Botswana", "BW"),
    ("Brazil", "BR"),
    ("Brunei", "BN"),
    ("Bulgaria", "BG"),
    ("Burkina Faso", "BF"),
    ("Cambodia", "KH"),
    ("Cameroon", "CM"),
    ("Canada", "CA"),
    ("Cayman Islands", "KY"),
    ("Chad", "TD"),
    ("Chile", "CL"),
    ("China", "CN"),
    ("Colombia", "CO"),
    ("Costa Rica", "CR"),
    ("Croatia", "HR"),
    ("Cuba", "CU"),
    ("Cyprus", "CY"),
    ("Czechia", "CZ"),
    ("DR Congo", "CD"),
    ("Denmark", "DK"),
    ("Dominican Republic", "DO"),
    ("Ecuador", "EC"),
    ("Egypt", "EG"),
    ("El Salvador", "SV"),
    ("Estonia", "EE"),
    ("Ethiopia", "ET"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("French Polynesia", "PF"),
    ("French Southern and Antarctic Lands", "TF"),
    ("Georgia", "GE"),
    ("Germany", "DE"),
    ("Ghana", "GH"),
    ("Gibraltar", "GI"),
    ("Greece", "GR"),
    ("Guatemala", "GT"),
    ("Guinea", "GN"),
    ("Honduras", "HN"),
    ("Hong Kong", "HK"),
    ("Hungary", "HU"),
    ("Iceland", "IS"),
    ("India", "IN"),
    ("Indonesia", "ID"),
    ("Iran", "IR"),
    ("Iraq", "IQ"),
    ("Ireland", "IE"),
    ("Israel", "IL"),
    ("Italy", "IT"),
    ("Ivory Coast", "CI"),
    ("Jamaica", "JM"),
    ("Japan", "JP"),
    ("Jordan", "JO"),
    ("Kazakhstan", "KZ"),
    ("Kenya", "KE"),
    ("Kuwait", "KW"),
    ("Kyrgyzstan", "KG"),
    ("Laos", "LA"),
    ("Latvia", "LV"),
    ("Lebanon", "LB"),
    ("Liberia", "LR"),
    ("Libya", "LY"),
    ("Liechtenstein", "LI"),
    ("Lithuania", "LT"),
    ("Luxembourg", "LU"),
    ("Macau", "MO"),
    ("Madagascar", "MG"),
    ("Malaysia", "MY"),
    ("Mali", "ML"),
    ("Malta", "MT"),
    ("Martinique", "MQ"),
    ("Mauritania", "MR"),
    ("Mexico", "MX"),
    ("Moldova", "MD"),
    ("Monaco", "MC"),
    ("Mongolia", "MN"),
    ("Montenegro", "ME"),
    ("Morocco", "MA"),
    ("Myanmar", "MM"),
    ("Namibia", "NA"),
    ("Nepal", "NP"),
    ("Netherlands", "NL"),
    ("New Zealand", "NZ"),
    ("Nicaragua", "NI"),
    ("Nigeria", "NG"),
    ("North Korea", "KP"),
    ("North Macedonia", "MK"),
    ("Norway", "NO"),
    ("Pakistan", "PK"),
    ("Palestine", "PS"),
    ("Panama", "PA"),
    ("Papua New Guinea", "PG"),
    ("Paraguay", "PY"),
    ("Peru", "PE"),
    ("Philippines", "PH"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("Puerto Rico", "PR"),
    ("Qatar", "QA"),
    ("Republic of the Congo", "CG"),
    ("Romania", "RO"),
    ("Russia", "RU"),
    ("Rwanda", "RW"),
    ("Samoa", "WS"),
    ("Saudi Arabia", "SA"),
    ("Senegal", "SN"),
    ("Serbia", "RS"),
    ("Singapore", "SG"),
    ("Slovakia", "SK"),
    ("Slovenia", "SI"),
    ("Somalia", "SO"),
    ("South Africa", "ZA"),
    ("South Korea", "KR"),
    ("Spain", "ES"),
    ("Sri Lanka", "LK"),
    ("Sweden", "SE"),
    ("Switzerland", "CH"),
    ("Syria", "SY"),
    ("Taiwan", "TW"),
    ("Tajikistan", "TJ"),
    ("Tanzania", "TZ"),
    ("Thailand", "TH"),
    ("Trinidad and Tobago", "TT"),
    ("Tunisia", "TN"),
    ("Turkey", "TR"),
    ("Uganda", "UG"),
    ("Ukraine", "UA"),
    ("United Arab Emirates", "AE"),
    ("United Kingdom", "GB"),
    ("United States", "US"),
    ("United States Minor Outlying Islands", "UM"),
    ("Uruguay", "UY"),
    ("Uzbekistan", "UZ"),
    ("Venezuela", "VE"),
    ("Vietnam", "VN"),
    ("Zimbabwe", "ZW"),
];

static CODE_BY_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRY_TABLE.iter().copied().collect());

static NAME_BY_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRY_TABLE.iter().map(|&(name, code)| (code, name)).collect());

/// Code for an exact English country name; surrounding whitespace is ignored.
pub fn code_for_name(name: &str) -> Option<&'static str> {
    CODE_BY_NAME.get(name.trim()).copied()
}

pub fn name_for_code(code: &str) -> Option<&'static str> {
    NAME_BY_CODE.get(code).copied()
}

/// All known country names in alphabetical order.
pub fn names() -> impl Iterator<Item = &'static str> {
    COUNTRY_TABLE.iter().map(|&(name, _)| name)
}
