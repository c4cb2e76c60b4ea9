//! Built-in provider table.

use std::time::Duration;

use super::table::{NOT_SAFE_CLASS, Provider, ProviderTable, ResponseShape, SAFE_CLASS};
use crate::config::Config;

pub const WAIFU_PICS: &str = "waifu.pics";
pub const NEKOS_BEST: &str = "nekos.best";
pub const HENTAICORD: &str = "hentaicord";
pub const WAIFU_IM: &str = "waifu.im";

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

pub const WAIFU_SFW: &[&str] = &[
    "waifu", "neko", "shinobu", "megumin", "bully", "cuddle", "cry", "hug", "awoo", "kiss",
    "lick", "pat", "smug", "bonk", "yeet", "blush", "smile", "wave", "highfive", "handhold",
    "nom", "bite", "glomp", "slap", "kill", "kick", "happy", "wink", "poke", "dance", "cringe",
];

pub const WAIFU_NSFW: &[&str] = &[
    "waifu", "neko", "trap", "blowjob", "ass", "bdsm", "cum", "creampie", "manga", "futanari",
    "hentai", "incest", "masturbation", "public", "ero", "orgy", "elves", "yuri", "pantsu",
    "glasses", "cuckold", "boobjob", "handjob", "footjob", "pussy", "ahegao", "uniform",
    "gangbang", "tentacles", "gif", "nsfwNeko", "nsfwWaifu",
];

pub const NEKOS_SFW: &[&str] = &[
    "hug", "kiss", "pat", "wink", "slap", "poke", "dance", "blush", "smile", "wave",
    "highfive", "handhold", "bite", "neko", "waifu", "cuddle", "cry", "awoo", "lick", "smug",
    "bonk", "yeet", "nom", "glomp", "kill", "kick", "happy", "cringe",
];

/// Shared by every hentaicord class.
pub const HENTAICORD_TAGS: &[&str] = &[
    "boobs", "ass", "thighs", "feet", "pussy", "blowjob", "handjob", "footjob", "tits", "milf",
    "teen", "mature", "big_boobs", "big_ass", "small_boobs", "small_ass", "redhead", "blonde",
    "brunette", "black_hair", "white_hair", "blue_hair", "pink_hair", "green_hair",
    "purple_hair", "brown_hair", "long_hair", "short_hair", "twin_tails", "ponytail", "bob_cut",
    "afro", "curly_hair", "straight_hair", "wavy_hair", "braided_hair", "bun", "pigtails",
    "side_ponytail", "space_buns", "french_braid", "dutch_braid", "fishtail_braid",
    "crown_braid", "waterfall_braid", "milkmaid_braid", "rope_braid", "ladder_braid",
    "herringbone_braid",
];

pub const HENTAICORD_CLASSES: &[&str] = &["hentai", "real_porn", "roleplay"];

/// The four upstreams the service ships with, base URLs taken from `cfg`.
pub fn default_table(cfg: &Config) -> ProviderTable {
    let waifu_pics = Provider::new(
        WAIFU_PICS,
        cfg.waifu_pics_api_url.clone(),
        ResponseShape::SimpleObject,
    )
    .priority(1)
    .timeout(PROVIDER_TIMEOUT)
    .categories(SAFE_CLASS, WAIFU_SFW.iter().copied())
    .categories(NOT_SAFE_CLASS, WAIFU_NSFW.iter().copied());

    let nekos_best = Provider::new(
        NEKOS_BEST,
        cfg.nekos_api_url.clone(),
        ResponseShape::ResultsArray,
    )
    .priority(2)
    .timeout(PROVIDER_TIMEOUT)
    .path("/{category}")
    .categories(SAFE_CLASS, NEKOS_SFW.iter().copied());

    // Requests always go to the `hentai` type; its tags are what nsfw resolution serves.
    let hentaicord = HENTAICORD_CLASSES.iter().fold(
        Provider::new(
            HENTAICORD,
            cfg.hentaicord_api_url.clone(),
            ResponseShape::Credentialed,
        )
        .priority(3)
        .timeout(PROVIDER_TIMEOUT)
        .path("/retrieve/hentai/{category}")
        .catalog("/types-categories")
        .categories(NOT_SAFE_CLASS, HENTAICORD_TAGS.iter().copied()),
        |provider, class| provider.categories(*class, HENTAICORD_TAGS.iter().copied()),
    );

    let waifu_im = Provider::new(
        WAIFU_IM,
        cfg.waifu_im_api_url.clone(),
        ResponseShape::ImagesArray,
    )
    .priority(4)
    .timeout(PROVIDER_TIMEOUT)
    .categories(SAFE_CLASS, WAIFU_SFW.iter().copied())
    .categories(NOT_SAFE_CLASS, WAIFU_NSFW.iter().copied());

    ProviderTable::new(vec![waifu_pics, nekos_best, hentaicord, waifu_im])
}
