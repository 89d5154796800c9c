// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! English display names for ISO 4217 alphabetic currency codes.
//!
//! The table is a sorted static slice, so lookups are a binary search and the
//! catalog can be shared between threads without any synchronisation.

use crate::error::CurrencyError;
use crate::models::{Currency, CurrencyCode};

/// Code/name pairs, sorted by code.
static CURRENCY_NAMES_EN: &[(&str, &str)] = &[
    ("AED", "UAE Dirham"),
    ("AFN", "Afghani"),
    ("ALL", "Lek"),
    ("AMD", "Armenian Dram"),
    ("ANG", "Netherlands Antillian Guilder"),
    ("AOA", "Kwanza"),
    ("ARS", "Argentine Peso"),
    ("AUD", "Australian Dollar"),
    ("AWG", "Aruban Guilder"),
    ("AZN", "Azerbaijanian Manat"),
    ("BAM", "Convertible Marks"),
    ("BBD", "Barbados Dollar"),
    ("BDT", "Taka"),
    ("BGN", "Bulgarian Lev"),
    ("BHD", "Bahraini Dinar"),
    ("BIF", "Burundi Franc"),
    ("BMD", "Bermudian Dollar"),
    ("BND", "Brunei Dollar"),
    ("BOB", "Boliviano"),
    ("BRL", "Brazilian Real"),
    ("BSD", "Bahamian Dollar"),
    ("BTN", "Ngultrum"),
    ("BWP", "Pula"),
    ("BYR", "Belarussian Ruble"),
    ("BZD", "Belize Dollar"),
    ("CAD", "Canadian Dollar"),
    ("CDF", "Congolese Franc"),
    ("CHF", "Swiss Franc"),
    ("CLP", "Chilean Peso"),
    ("CNY", "Chinese Yuan"),
    ("COP", "Colombian Peso"),
    ("CRC", "Costa Rican Colon"),
    ("CUP", "Cuban Peso"),
    ("CVE", "Cape Verde Escudo"),
    ("CZK", "Czech Koruna"),
    ("DJF", "Djibouti Franc"),
    ("DKK", "Danish Krone"),
    ("DOP", "Dominican Peso"),
    ("DZD", "Algerian Dinar"),
    ("EEK", "Kroon"),
    ("EGP", "Egyptian Pound"),
    ("ERN", "Nakfa"),
    ("ETB", "Ethiopian Birr"),
    ("EUR", "Euro"),
    ("FJD", "Fiji Dollar"),
    ("FKP", "Falkland Islands Pound"),
    ("GBP", "Pound Sterling"),
    ("GEL", "Lari"),
    ("GGP", "Guernsey Pound"),
    ("GHS", "Cedi"),
    ("GIP", "Gibraltar Pound"),
    ("GMD", "Dalasi"),
    ("GNF", "Guinea Franc"),
    ("GTQ", "Quetzal"),
    ("GWP", "Guinea-Bissau Peso"),
    ("GYD", "Guyana Dollar"),
    ("HKD", "Hong Kong Dollar"),
    ("HNL", "Lempira"),
    ("HRK", "Croatian Kuna"),
    ("HTG", "Gourde"),
    ("HUF", "Hungary Forint"),
    ("IDR", "Rupiah"),
    ("ILS", "Israeli Sheqel"),
    ("IMP", "Manx pound"),
    ("INR", "Indian Rupee"),
    ("IQD", "Iraqi Dinar"),
    ("IRR", "Iranian Rial"),
    ("ISK", "Iceland Krona"),
    ("JEP", "Jersey Pound"),
    ("JMD", "Jamaican Dollar"),
    ("JOD", "Jordanian Dinar"),
    ("JPY", "Japan Yen"),
    ("KES", "Kenyan Shilling"),
    ("KGS", "Som"),
    ("KHR", "Riel"),
    ("KMF", "Comoro Franc"),
    ("KPW", "North Korean Won"),
    ("KRW", "Won"),
    ("KWD", "Kuwaiti Dinar"),
    ("KYD", "Cayman Islands Dollar"),
    ("KZT", "Tenge"),
    ("LAK", "Kip"),
    ("LBP", "Lebanese Pound"),
    ("LKR", "Sri Lanka Rupee"),
    ("LRD", "Liberian Dollar"),
    ("LSL", "Loti"),
    ("LTL", "Lithuanian Litas"),
    ("LVL", "Latvian Lats"),
    ("LYD", "Libyan Dinar"),
    ("MAD", "Moroccan Dirham"),
    ("MDL", "Moldovan Leu"),
    ("MGA", "Malagasy Ariary"),
    ("MKD", "Denar"),
    ("MMK", "Kyat"),
    ("MNT", "Tugrik"),
    ("MOP", "Pataca"),
    ("MRO", "Ouguiya"),
    ("MUR", "Mauritius Rupee"),
    ("MVR", "Rufiyaa"),
    ("MWK", "Kwacha"),
    ("MXN", "Mexican Peso"),
    ("MYR", "Malaysian Ringgit"),
    ("MZN", "Metical"),
    ("NAD", "Namibia Dollar"),
    ("NGN", "Naira"),
    ("NIO", "Cordoba Oro"),
    ("NOK", "Norwegian Krone"),
    ("NPR", "Nepalese Rupee"),
    ("NZD", "New Zealand Dollar"),
    ("OMR", "Rial Omani"),
    ("PAB", "Balboa"),
    ("PEN", "Nuevo Sol"),
    ("PGK", "Kina"),
    ("PHP", "Philippine Peso"),
    ("PKR", "Pakistan Rupee"),
    ("PLN", "Polish Zloty"),
    ("PYG", "Guarani"),
    ("QAR", "Qatari Rial"),
    ("RON", "New Leu"),
    ("RSD", "Serbian Dinar"),
    ("RUB", "Russian Ruble"),
    ("RWF", "Rwanda Franc"),
    ("SAR", "Saudi Riyal"),
    ("SBD", "Solomon Islands Dollar"),
    ("SCR", "Seychelles Rupee"),
    ("SDG", "Sudanese Pound"),
    ("SEK", "Swedish Krona"),
    ("SGD", "Singapore Dollar"),
    ("SHP", "Saint Helena Pound"),
    ("SLL", "Leone"),
    ("SOS", "Somali Shilling"),
    ("SRD", "Surinam Dollar"),
    ("SSP", "South Sudanese pound"),
    ("STD", "Dobra"),
    ("SVC", "Salvadoran Colon"),
    ("SYP", "Syrian Pound"),
    ("SZL", "Lilangeni"),
    ("THB", "Baht"),
    ("TJS", "Somoni"),
    ("TMT", "Manat"),
    ("TND", "Tunisian Dinar"),
    ("TOP", "Pa'anga"),
    ("TRY", "Turkish Lira"),
    ("TTD", "Trinidad and Tobago Dollar"),
    ("TVD", "Tuvaluan dollar"),
    ("TWD", "Taiwan Dollar"),
    ("TZS", "Tanzanian Shilling"),
    ("UAH", "Hryvnia"),
    ("UGX", "Uganda Shilling"),
    ("USD", "US Dollar"),
    ("UYU", "Peso Uruguayo"),
    ("UZS", "Uzbekistan Sum"),
    ("VEF", "Bolivar Fuerte"),
    ("VND", "Dong"),
    ("VUV", "Vatu"),
    ("WST", "Tala"),
    ("XAF", "CFA Franc"),
    ("XCD", "East Caribbean Dollar"),
    ("XOF", "CFA Franc"),
    ("XPF", "CFP Franc"),
    ("YER", "Yemeni Rial"),
    ("ZAR", "Rand"),
    ("ZMW", "Zambian Kwacha"),
    ("ZWL", "Zimbabwe Dollar"),
];

static ENGLISH: CurrencyCatalog = CurrencyCatalog {
    entries: CURRENCY_NAMES_EN,
};

/// How [`CurrencyCatalog::resolve`] treats input that is not an exact match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Trim and upper-case the input before looking it up.
    pub normalize: bool,
    /// Return the input itself instead of an error when no name is found.
    pub fallback_to_code: bool,
}

/// An immutable mapping from currency code to display name.
#[derive(Debug)]
pub struct CurrencyCatalog {
    entries: &'static [(&'static str, &'static str)],
}

impl CurrencyCatalog {
    /// The English catalog.
    pub fn english() -> &'static CurrencyCatalog {
        &ENGLISH
    }

    /// Get the display name for an exact-case code
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .binary_search_by(|(c, _)| (*c).cmp(code))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Like [`get`](Self::get), but absence is an [`CurrencyError::UnknownCode`].
    pub fn lookup(&self, code: &str) -> Result<&'static str, CurrencyError> {
        self.get(code)
            .ok_or_else(|| CurrencyError::UnknownCode(code.to_string()))
    }

    /// Trim and upper-case `input`, check it is a well-formed code, then look it up.
    pub fn lookup_normalized(&self, input: &str) -> Result<&'static str, CurrencyError> {
        let code = CurrencyCode::normalize(input)?;
        self.lookup(code.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// The display name, or the code itself when it is not in the catalog.
    pub fn display_name<'a>(&self, code: &'a str) -> &'a str {
        self.get(code).unwrap_or(code)
    }

    pub fn resolve<'a>(
        &self,
        input: &'a str,
        options: LookupOptions,
    ) -> Result<&'a str, CurrencyError> {
        let found = if options.normalize {
            self.lookup_normalized(input)
        } else {
            self.lookup(input)
        };

        match found {
            Ok(name) => Ok(name),
            Err(_) if options.fallback_to_code => Ok(input),
            Err(e) => Err(e),
        }
    }

    /// All codes sharing the exact display name `name`, in code order.
    pub fn codes_for_name(&self, name: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(_, n)| *n == name)
            .map(|(c, _)| *c)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.entries.iter().copied()
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn to_currencies(&self) -> Vec<Currency> {
        self.iter().map(Currency::from).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let catalog = CurrencyCatalog::english();
        assert_eq!(catalog.lookup("USD"), Ok("US Dollar"));
        assert_eq!(catalog.lookup("EUR"), Ok("Euro"));
        assert_eq!(catalog.lookup("GBP"), Ok("Pound Sterling"));
        assert_eq!(catalog.lookup("TOP"), Ok("Pa'anga"));
        assert_eq!(catalog.lookup("ZWL"), Ok("Zimbabwe Dollar"));
    }

    #[test]
    fn test_shared_names() {
        let catalog = CurrencyCatalog::english();
        assert_eq!(catalog.lookup("XOF"), Ok("CFA Franc"));
        assert_eq!(catalog.lookup("XAF"), Ok("CFA Franc"));
        assert_eq!(catalog.codes_for_name("CFA Franc"), vec!["XAF", "XOF"]);
        assert_eq!(catalog.codes_for_name("Euro"), vec!["EUR"]);
        assert!(catalog.codes_for_name("Space Credits").is_empty());
    }

    #[test]
    fn test_unknown_code() {
        let catalog = CurrencyCatalog::english();
        assert_eq!(
            catalog.lookup("ZZZ"),
            Err(CurrencyError::UnknownCode("ZZZ".to_string()))
        );
        assert_eq!(catalog.get("ZZZ"), None);
        assert!(!catalog.contains("ZZZ"));
        assert_eq!(catalog.get(""), None);
    }

    #[test]
    fn test_every_entry_resolves() {
        let catalog = CurrencyCatalog::english();
        for (code, name) in catalog.iter() {
            let first = catalog.lookup(code).unwrap();
            assert!(!first.is_empty(), "empty name for {}", code);
            assert_eq!(first, name);
            assert_eq!(catalog.lookup(code).unwrap(), first);
        }
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(CurrencyCatalog::english().len(), 164);
        assert!(!CurrencyCatalog::english().is_empty());
    }

    #[test]
    fn test_codes_are_sorted_uppercase_triplets() {
        let codes: Vec<_> = CurrencyCatalog::english().codes().collect();
        for code in &codes {
            assert_eq!(code.len(), 3, "bad length: {}", code);
            assert!(code.bytes().all(|b| b.is_ascii_uppercase()), "bad code: {}", code);
        }
        // strictly ascending also means no duplicates
        for pair in codes.windows(2) {
            assert!(pair[0] < pair[1], "{} is not before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_exact_case_only() {
        let catalog = CurrencyCatalog::english();
        assert!(catalog.lookup("usd").is_err());
        assert!(catalog.lookup(" USD").is_err());
        assert_eq!(catalog.lookup_normalized(" usd\n"), Ok("US Dollar"));
        assert_eq!(catalog.lookup_normalized("Chf"), Ok("Swiss Franc"));
    }

    #[test]
    fn test_normalized_rejects_malformed() {
        let catalog = CurrencyCatalog::english();
        assert_eq!(
            catalog.lookup_normalized("US"),
            Err(CurrencyError::MalformedCode("US".to_string()))
        );
        assert!(matches!(
            catalog.lookup_normalized("U$D"),
            Err(CurrencyError::MalformedCode(_))
        ));
        assert_eq!(
            catalog.lookup_normalized("zzz"),
            Err(CurrencyError::UnknownCode("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_display_name_falls_back_to_code() {
        let catalog = CurrencyCatalog::english();
        assert_eq!(catalog.display_name("JPY"), "Japan Yen");
        assert_eq!(catalog.display_name("BTC"), "BTC");
    }

    #[test]
    fn test_resolve_options() {
        let catalog = CurrencyCatalog::english();

        let strict = LookupOptions::default();
        assert_eq!(catalog.resolve("SEK", strict), Ok("Swedish Krona"));
        assert!(catalog.resolve("sek", strict).is_err());

        let normalize = LookupOptions {
            normalize: true,
            ..Default::default()
        };
        assert_eq!(catalog.resolve("sek", normalize), Ok("Swedish Krona"));
        assert!(catalog.resolve("sekk", normalize).is_err());

        let fallback = LookupOptions {
            normalize: true,
            fallback_to_code: true,
        };
        assert_eq!(catalog.resolve("sekk", fallback), Ok("sekk"));
        assert_eq!(catalog.resolve("XBT", fallback), Ok("XBT"));
    }

    #[test]
    fn test_to_currencies() {
        let currencies = CurrencyCatalog::english().to_currencies();
        assert_eq!(currencies.len(), 164);
        assert_eq!(currencies[0].code, "AED");
        assert_eq!(currencies[0].name, "UAE Dirham");
    }
}
