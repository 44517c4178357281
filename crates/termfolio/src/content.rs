//! What the foreground tabs print.

use termfolio_core::TranscriptSection;

/// A named entry in a listing pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingItem {
    pub name: &'static str,
    pub description: &'static str,
    pub url: Option<&'static str>,
}

/// Trailing link under a listing pane's items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLink {
    pub url: &'static str,
    pub label: &'static str,
}

/// A pane that types a command, then prints a titled list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingContent {
    pub title: &'static str,
    pub command: &'static str,
    pub items: &'static [ListingItem],
    pub link: Option<PaneLink>,
}

const fn item(name: &'static str, description: &'static str, url: &'static str) -> ListingItem {
    ListingItem {
        name,
        description,
        url: Some(url),
    }
}

const fn unlinked(name: &'static str, description: &'static str) -> ListingItem {
    ListingItem {
        name,
        description,
        url: None,
    }
}

pub const PROJECT_PANES: &[ListingContent] = &[
    ListingContent {
        title: "startup I'm working on",
        command: "curl https://hicira.com",
        items: &[item(
            "HiCira",
            "AI voice receptionist that answers calls 24/7, handles questions, and books jobs for your small business",
            "https://hicira.com",
        )],
        link: None,
    },
    ListingContent {
        title: "raycast extensions I've built",
        command: "ls ~/projects/raycast",
        items: &[
            unlinked("MCP Edit", "Quickly edit MCP configuration files"),
            unlinked("URL Resolver", "Resolve URLs using DNS-over-HTTPS"),
            unlinked("AdGuard DNS", "Analyze AdGuard DNS query logs and unblock domains"),
        ],
        link: Some(PaneLink {
            url: "https://raycast.com/kevintraver",
            label: "View on Raycast Store",
        }),
    },
    ListingContent {
        title: "fun projects I've built",
        command: "ls ~/projects/fun",
        items: &[
            item("Flappy Hands", "Flappy Bird but with your hands", "https://flappyhands.fun"),
            item(
                "Ridiculous UI",
                "A collection of the most absurd, frustrating, and hilarious UI controls ever designed. They all work... technically",
                "https://ridiculous-ui.vercel.app",
            ),
            item(
                "Deal With It",
                "Upload a photo to add the iconic sunglasses",
                "https://deal-with-it.vercel.app",
            ),
        ],
        link: None,
    },
    ListingContent {
        title: "projects I'm working on now",
        command: "ls ~/projects/wip",
        items: &[
            item(
                "HN Summarizer",
                "AI Powered Hacker News summarizer",
                "https://hn-comments-summarizer-46v2.vercel.app",
            ),
            unlinked("StopTyping", "App that reminds you to stop typing and use Speech to Text"),
        ],
        link: None,
    },
];

pub const DEV_PANES: &[ListingContent] = &[
    ListingContent {
        title: "some of my favorite mac apps",
        command: "ls -la /Applications",
        items: &[
            item("Leader Key", "The *faster than your launcher* launcher", "https://github.com/mikker/LeaderKey"),
            item(
                "Ghostty",
                "Ghostty is a fast, feature-rich, and cross-platform terminal emulator",
                "https://ghostty.org",
            ),
            item("Superwhisper", "Offline AI voice to text for macOS, Windows & iOS", "https://superwhisper.com"),
            item("Raycast", "Your shortcut to everything", "https://raycast.com"),
            item("Cursor", "The AI code editor", "https://cursor.com"),
            item("CleanShot X", "Capture your Mac's screen like a pro", "https://cleanshot.com"),
            item(
                "Rewrite Bar",
                "Improve your writing in any macOS application with AI assistance",
                "https://rewritebar.com",
            ),
            item("Cotypist", "AI Autocomplete for Mac", "https://cotypist.com"),
            item("Zen Browser", "A beautifully designed, privacy-focused browser", "https://zen-browser.app"),
            item("1Password", "The world's most-loved password manager", "https://1password.com"),
        ],
        link: None,
    },
    ListingContent {
        title: "my essential dev tools",
        command: "brew list | grep favorites",
        items: &[
            item(
                "Claude Code",
                "An agentic coding tool that lives in your terminal",
                "https://code.claude.com/docs/en/overview",
            ),
            item("OpenCode", "Terminal-based AI coding assistant", "https://opencode.ai"),
            item("Neovim", "Hyperextensible Vim-based text editor", "https://neovim.io"),
            item("yabai", "Tiling window manager for macOS", "https://github.com/koekeishiya/yabai"),
            item("lazygit", "Simple terminal UI for git commands", "https://github.com/jesseduffield/lazygit"),
        ],
        link: None,
    },
];

/// Delay between the start of consecutive listing panes
pub const LISTING_STAGGER_MS: f64 = 400.0;

pub fn home_sections() -> Vec<TranscriptSection> {
    vec![
        TranscriptSection::new("whoami", &["Kevin Traver"]),
        TranscriptSection::new(
            "groups",
            &["Software Developer", "Mountain Runner", "Drone Photographer"],
        ),
        TranscriptSection::new("uptime", &["12+ years coding"]),
        TranscriptSection::new(
            "defaults read locations",
            &["Salt Lake City, Utah", "Las Vegas, Nevada"],
        ),
    ]
}

pub const SOCIAL_COMMAND: &str = "dig @kevintraver";

pub const DIG_HEADER: &[&str] = &[
    "",
    ";; global options: +cmd",
    ";; Got answer:",
    ";; ->>HEADER<<- opcode: QUERY, status: NOERROR",
    "",
    ";; ANSWER SECTION:",
];

/// A social profile, printed as a DNS answer record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialRecord {
    pub name: &'static str,
    pub ttl: u32,
    pub kind: &'static str,
    pub url: &'static str,
}

impl SocialRecord {
    /// The URL without its scheme.
    pub fn display_target(&self) -> &'static str {
        self.url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"))
            .unwrap_or(self.url)
    }
}

pub const SOCIAL_RECORDS: &[SocialRecord] = &[
    SocialRecord {
        name: "github",
        ttl: 300,
        kind: "LINK",
        url: "https://github.com/kevintraver",
    },
    SocialRecord {
        name: "x",
        ttl: 300,
        kind: "LINK",
        url: "https://x.com/kevintraver",
    },
    SocialRecord {
        name: "instagram",
        ttl: 300,
        kind: "LINK",
        url: "https://instagram.com/kevintraver",
    },
];
