/// Terminal commands answered with a safe image of the same name.
pub const SFW_COMMANDS: &[&str] = &[
    "kiss", "hug", "cuddle", "pat", "handhold", "waifu", "neko", "shinobu", "megumin", "bully",
    "cry", "awoo", "lick", "smug", "bonk", "yeet", "blush", "smile", "wave", "highfive", "nom",
    "bite", "glomp", "slap", "kill", "kick", "happy", "wink", "poke", "dance", "cringe",
];

/// Terminal commands answered with a not-safe image; the category is the part after `nsfw`.
pub const NSFW_COMMANDS: &[&str] = &[
    "nsfwwaifu", "nsfwneko", "nsfwspank", "nsfwbite", "nsfwblowjob", "nsfwtrap", "nsfwthighs",
    "nsfwass", "nsfwboobs", "nsfwfeet", "nsfwfuta", "nsfwhentai", "nsfworgy", "nsfwpaizuri",
    "nsfwyaoi", "nsfwyuri",
];

const NSFW_PREFIX: &str = "nsfw";

/// Command suffixes whose provider category is spelled differently.
const NSFW_ALIASES: &[(&str, &str)] = &[("futa", "futanari"), ("paizuri", "boobjob")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandTarget {
    Image { category: String, safe: bool },
    Unknown(String),
}

/// Map a raw command name (any case) onto what it should resolve.
pub fn classify(raw: &str) -> CommandTarget {
    let command = raw.trim().to_lowercase();

    if SFW_COMMANDS.contains(&command.as_str()) {
        return CommandTarget::Image {
            category: command,
            safe: true,
        };
    }

    if NSFW_COMMANDS.contains(&command.as_str())
        && let Some(suffix) = command.strip_prefix(NSFW_PREFIX)
    {
        let category = NSFW_ALIASES
            .iter()
            .find(|(alias, _)| *alias == suffix)
            .map(|(_, target)| *target)
            .unwrap_or(suffix);
        return CommandTarget::Image {
            category: category.to_string(),
            safe: false,
        };
    }

    CommandTarget::Unknown(command)
}
