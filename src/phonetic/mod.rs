pub mod caverphone;
pub mod metaphone;
pub mod nysiis;
pub mod soundex;

use serde::{Deserialize, Serialize};

pub use caverphone::{CaverphoneVersion, caverphone, caverphone_versioned};
pub use metaphone::metaphone;
pub use nysiis::nysiis;
pub use soundex::soundex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneticAlgorithm {
    Soundex,
    Metaphone,
    Caverphone,
    Nysiis,
}

impl PhoneticAlgorithm {
    pub const ALL: [PhoneticAlgorithm; 4] = [
        PhoneticAlgorithm::Soundex,
        PhoneticAlgorithm::Metaphone,
        PhoneticAlgorithm::Caverphone,
        PhoneticAlgorithm::Nysiis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PhoneticAlgorithm::Soundex => "soundex",
            PhoneticAlgorithm::Metaphone => "metaphone",
            PhoneticAlgorithm::Caverphone => "caverphone",
            PhoneticAlgorithm::Nysiis => "nysiis",
        }
    }

    pub fn encode(self, token: &str, caverphone_version: CaverphoneVersion) -> String {
        match self {
            PhoneticAlgorithm::Soundex => soundex(token),
            PhoneticAlgorithm::Metaphone => metaphone(token),
            PhoneticAlgorithm::Caverphone => caverphone_versioned(token, caverphone_version),
            PhoneticAlgorithm::Nysiis => nysiis(token),
        }
    }
}

/// All four codes for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticCodes {
    pub soundex: String,
    pub metaphone: String,
    pub caverphone: String,
    pub nysiis: String,
}

pub fn phonetic_codes(token: &str) -> PhoneticCodes {
    phonetic_codes_versioned(token, CaverphoneVersion::default())
}

pub fn phonetic_codes_versioned(
    token: &str,
    caverphone_version: CaverphoneVersion,
) -> PhoneticCodes {
    PhoneticCodes {
        soundex: soundex(token),
        metaphone: metaphone(token),
        caverphone: caverphone_versioned(token, caverphone_version),
        nysiis: nysiis(token),
    }
}

/// Encodes every whitespace-delimited token and joins the codes with single spaces.
pub fn encode_text(
    text: &str,
    algorithm: PhoneticAlgorithm,
    caverphone_version: CaverphoneVersion,
) -> String {
    text.split_whitespace()
        .map(|token| algorithm.encode(token, caverphone_version))
        .collect::<Vec<_>>()
        .join(" ")
}
