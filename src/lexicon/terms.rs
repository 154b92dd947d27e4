//! Curated base term tables.
//!
//! Entries are written in their natural form and normalized when a
//! [`Lexicon`](super::Lexicon) is built. Which tier a term lands in is
//! product policy; substring matching means short entries that occur inside
//! everyday words are left out on purpose.

/// Terms whose presence always rejects a message.
pub const BLOCK_TERMS: &[&str] = &[
    // Slurs
    "nigger",
    "nigga",
    "faggot",
    "retard",
    "chink",
    "kike",
    "tranny",
    "wetback",
    "raghead",
    "towelhead",
    // Sexual
    "porn",
    "child porn",
    "blowjob",
    "cumshot",
    "gangbang",
    "send nudes",
    // Self-harm
    "kill yourself",
    "kill urself",
    "kys",
    "hang yourself",
    "neck yourself",
    // Illegal activity
    "buy cocaine",
    "buy meth",
    "sell drugs",
    "buy a gun",
    // Inflammatory
    "heil hitler",
    "sieg heil",
    "white power",
    "gas the jews",
    // Korean
    "느금마",
    "니애미",
    "애미뒤진",
    "자살해",
    "섹스",
    // Japanese
    "死ね",
    "ちんこ",
    // Chinese
    "操你妈",
    "去死",
    // Spanish / French / German / Russian
    "maricón",
    "suicídate",
    "nique ta mère",
    "пидор",
];

/// Mild profanity and insults. Matches are masked, the message still goes out.
pub const BASE_MASK_TERMS: &[&str] = &[
    // English
    "fuck",
    "motherfucker",
    "shit",
    "bullshit",
    "bitch",
    "bastard",
    "asshole",
    "dickhead",
    "douchebag",
    "dumbass",
    "idiot",
    "moron",
    "stupid",
    "loser",
    "damn",
    "wtf",
    "stfu",
    // Korean
    "씨발",
    "시발",
    "병신",
    "개새끼",
    "존나",
    "지랄",
    "미친놈",
    "바보",
    "멍청이",
    "닥쳐",
    // Japanese
    "バカ",
    "ばか",
    "くそ",
    "アホ",
    "うざい",
    "きもい",
    // Chinese
    "傻逼",
    "他妈的",
    "笨蛋",
    "白痴",
    "滚蛋",
    // Spanish
    "puta",
    "mierda",
    "pendejo",
    "cabrón",
    "joder",
    "idiota",
    // French
    "merde",
    "putain",
    "connard",
    "salope",
    "enculé",
    // German
    "scheiße",
    "scheisse",
    "arschloch",
    "wichser",
    // Portuguese
    "porra",
    "caralho",
    "merda",
    "otário",
    // Italian
    "cazzo",
    "stronzo",
    "vaffanculo",
    // Russian
    "сука",
    "блять",
    "пиздец",
    "дурак",
    // Hindi
    "चूतिया",
    "कमीना",
    "बेवकूफ",
    // Arabic
    "حقير",
    // Thai
    "เหี้ย",
    // Vietnamese
    "đồ ngu",
];
