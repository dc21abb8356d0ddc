//! Address types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A postal address as submitted with a person entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<UsState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
}

impl Address {
    /// Creates a new address without optional lines
    pub fn new(
        line_1: impl Into<String>,
        city: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            line_1: line_1.into(),
            line_2: None,
            city: city.into(),
            state: None,
            postal_code: None,
            country_code: country_code.into(),
        }
    }

    /// Sets the state
    pub fn with_state(mut self, state: UsState) -> Self {
        self.state = Some(state);
        self
    }

    /// Returns true for addresses in the United States
    pub fn is_us(&self) -> bool {
        self.country_code == "US"
    }
}

macro_rules! us_states {
    ($($code:ident => $name:literal),+ $(,)?) => {
        /// US state, district, or territory postal abbreviation
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum UsState {
            $(
                #[doc = $name]
                $code,
            )+
        }

        impl UsState {
            /// Every accepted abbreviation, states first, then territories
            pub const ALL: &'static [UsState] = &[$(UsState::$code),+];

            /// Two-letter upper-case postal code
            pub fn code(&self) -> &'static str {
                match self {
                    $(UsState::$code => stringify!($code),)+
                }
            }
        }
    };
}

us_states! {
    AL => "Alabama",
    AK => "Alaska",
    AZ => "Arizona",
    AR => "Arkansas",
    CA => "California",
    CO => "Colorado",
    CT => "Connecticut",
    DE => "Delaware",
    FL => "Florida",
    GA => "Georgia",
    HI => "Hawaii",
    ID => "Idaho",
    IL => "Illinois",
    IN => "Indiana",
    IA => "Iowa",
    KS => "Kansas",
    KY => "Kentucky",
    LA => "Louisiana",
    ME => "Maine",
    MD => "Maryland",
    MA => "Massachusetts",
    MI => "Michigan",
    MN => "Minnesota",
    MS => "Mississippi",
    MO => "Missouri",
    MT => "Montana",
    NE => "Nebraska",
    NV => "Nevada",
    NH => "New Hampshire",
    NJ => "New Jersey",
    NM => "New Mexico",
    NY => "New York",
    NC => "North Carolina",
    ND => "North Dakota",
    OH => "Ohio",
    OK => "Oklahoma",
    OR => "Oregon",
    PA => "Pennsylvania",
    RI => "Rhode Island",
    SC => "South Carolina",
    SD => "South Dakota",
    TN => "Tennessee",
    TX => "Texas",
    UT => "Utah",
    VT => "Vermont",
    VA => "Virginia",
    WA => "Washington",
    WV => "West Virginia",
    WI => "Wisconsin",
    WY => "Wyoming",
    AS => "American Samoa",
    DC => "District of Columbia",
    FM => "Federated States of Micronesia",
    GU => "Guam",
    MH => "Marshall Islands",
    MP => "Northern Mariana Islands",
    PW => "Palau",
    PR => "Puerto Rico",
    VI => "U.S. Virgin Islands",
}

/// Error for an unrecognised state abbreviation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid US state or territory abbreviation: {0}")]
pub struct UnknownStateError(pub String);

impl FromStr for UsState {
    type Err = UnknownStateError;

    /// Parses an abbreviation, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsState::ALL
            .iter()
            .copied()
            .find(|state| state.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStateError(s.to_string()))
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for UsState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for UsState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
