//! Recognized ZRXP metadata keys
//!
//! The key set is closed. Matching is ordered and literal: the first key in
//! [`MetadataKey::ALL`] that is a prefix of the field text wins, case-sensitive.
//! ZRXP writes keys glued to their value (`SANR2102`, `CUNITm3/s`), so there is
//! no word boundary to look for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A metadata key from the canonical ZRXP key enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetadataKey {
    #[serde(rename = "ZRXPVERSION")]
    ZrxpVersion,
    #[serde(rename = "ZRXPMODE")]
    ZrxpMode,
    #[serde(rename = "ZRXPCREATOR")]
    ZrxpCreator,
    #[serde(rename = "SANR")]
    StationNumber,
    #[serde(rename = "SNAME")]
    StationName,
    #[serde(rename = "REXCHANGE")]
    Exchange,
    #[serde(rename = "TZ")]
    Timezone,
    #[serde(rename = "CNR")]
    ChannelNumber,
    #[serde(rename = "CNAME")]
    ChannelName,
    #[serde(rename = "CTYPE")]
    ChannelType,
    #[serde(rename = "CUNIT")]
    ChannelUnit,
    #[serde(rename = "RTIMELVL")]
    TimeLevel,
    #[serde(rename = "RINVAL")]
    InvalidValue,
    #[serde(rename = "RNR")]
    RecordNumber,
    #[serde(rename = "LAYOUT")]
    Layout,
    #[serde(rename = "TSPATH")]
    TimeSeriesPath,
}

impl MetadataKey {
    /// Version of the key enumeration below. Bump when keys are added or reordered.
    pub const ENUMERATION_VERSION: u32 = 1;

    /// Every key, in matching order
    pub const ALL: [MetadataKey; 16] = [
        MetadataKey::ZrxpVersion,
        MetadataKey::ZrxpMode,
        MetadataKey::ZrxpCreator,
        MetadataKey::StationNumber,
        MetadataKey::StationName,
        MetadataKey::Exchange,
        MetadataKey::Timezone,
        MetadataKey::ChannelNumber,
        MetadataKey::ChannelName,
        MetadataKey::ChannelType,
        MetadataKey::ChannelUnit,
        MetadataKey::TimeLevel,
        MetadataKey::InvalidValue,
        MetadataKey::RecordNumber,
        MetadataKey::Layout,
        MetadataKey::TimeSeriesPath,
    ];

    /// The literal token as it appears in a ZRXP header
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::ZrxpVersion => "ZRXPVERSION",
            MetadataKey::ZrxpMode => "ZRXPMODE",
            MetadataKey::ZrxpCreator => "ZRXPCREATOR",
            MetadataKey::StationNumber => "SANR",
            MetadataKey::StationName => "SNAME",
            MetadataKey::Exchange => "REXCHANGE",
            MetadataKey::Timezone => "TZ",
            MetadataKey::ChannelNumber => "CNR",
            MetadataKey::ChannelName => "CNAME",
            MetadataKey::ChannelType => "CTYPE",
            MetadataKey::ChannelUnit => "CUNIT",
            MetadataKey::TimeLevel => "RTIMELVL",
            MetadataKey::InvalidValue => "RINVAL",
            MetadataKey::RecordNumber => "RNR",
            MetadataKey::Layout => "LAYOUT",
            MetadataKey::TimeSeriesPath => "TSPATH",
        }
    }

    /// Human readable meaning of the key
    pub fn description(self) -> &'static str {
        match self {
            MetadataKey::ZrxpVersion => "format version",
            MetadataKey::ZrxpMode => "exchange mode",
            MetadataKey::ZrxpCreator => "creating application",
            MetadataKey::StationNumber => "station number",
            MetadataKey::StationName => "station name",
            MetadataKey::Exchange => "exchange number",
            MetadataKey::Timezone => "timezone",
            MetadataKey::ChannelNumber => "channel number",
            MetadataKey::ChannelName => "channel name",
            MetadataKey::ChannelType => "channel type",
            MetadataKey::ChannelUnit => "channel unit",
            MetadataKey::TimeLevel => "time level",
            MetadataKey::InvalidValue => "invalid value marker",
            MetadataKey::RecordNumber => "record number",
            MetadataKey::Layout => "record layout",
            MetadataKey::TimeSeriesPath => "time series path",
        }
    }

    /// Split a header field into its recognized key and the remaining text
    ///
    /// Returns `None` when no key prefixes the field.
    pub fn split_prefix(field: &str) -> Option<(MetadataKey, &str)> {
        MetadataKey::ALL
            .iter()
            .find_map(|key| field.strip_prefix(key.as_str()).map(|rest| (*key, rest)))
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the enumerated keys
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metadata key '{0}'")]
pub struct UnknownKey(pub String);

impl FromStr for MetadataKey {
    type Err = UnknownKey;

    /// Exact, case-sensitive lookup of a key token
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetadataKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}
