// src/command/content.rs

//! Static text shown by the informational commands.

use crate::term::action::Section;
use crate::term::output::Line;

/// `ABDULAZIZ ALODAT` in the ANSI Shadow figlet font.
pub const NAME_BANNER: [&str; 6] = [
    " █████╗ ██████╗ ██████╗ ██╗   ██╗██╗      █████╗ ███████╗██╗███████╗     █████╗ ██╗      ██████╗ ██████╗  █████╗ ████████╗ ",
    "██╔══██╗██╔══██╗██╔══██╗██║   ██║██║     ██╔══██╗╚══███╔╝██║╚══███╔╝    ██╔══██╗██║     ██╔═══██╗██╔══██╗██╔══██╗╚══██╔══╝ ",
    "███████║██████╔╝██║  ██║██║   ██║██║     ███████║  ███╔╝ ██║  ███╔╝     ███████║██║     ██║   ██║██║  ██║███████║   ██║    ",
    "██╔══██║██╔══██╗██║  ██║██║   ██║██║     ██╔══██║ ███╔╝  ██║ ███╔╝      ██╔══██║██║     ██║   ██║██║  ██║██╔══██║   ██║    ",
    "██║  ██║██████╔╝██████╔╝╚██████╔╝███████╗██║  ██║███████╗██║███████╗    ██║  ██║███████╗╚██████╔╝██████╔╝██║  ██║   ██║    ",
    "╚═╝  ╚═╝╚═════╝ ╚═════╝  ╚═════╝ ╚══════╝╚═╝  ╚═╝╚══════╝╚═╝╚══════╝    ╚═╝  ╚═╝╚══════╝ ╚═════╝ ╚═════╝ ╚═╝  ╚═╝   ╚═╝    ",
];

pub const TITLE: &str = "Security Engineer At Diyar United Company";
pub const HELP_HINT: &str = "Type \"help\" for available commands";
pub const WELCOME: &str = "Welcome to macOS Terminal";
pub const IDLE_HINT: &str = "Still there? Type \"help\" to get started.";
pub const GITHUB_URL: &str = "https://github.com/odxxt";
pub const SNAKE_ALREADY_RUNNING: &str = "Snake game is already running!";
pub const TYPE_SAMPLE: &str = "This text is being typed...";
pub const GITHUB_OPENING: &str = "Opening GitHub profile...";
pub const RESTORE_HINT: &str = "Press Enter or R to restore the session.";
pub const HASH_FAILED: &str = "Hashing failed";

pub const GREETINGS: [&str; 11] = [
    "Hello! Looking to explore my projects? Try typing 'projects'.",
    "Hey there! Want to know more about me? Just type 'whoami'.",
    "Hi! Curious about my security tools? Use 'tools' to check them out.",
    "Hello! Need my contact info? Simply type 'contact'.",
    "Greetings! If you’re here for my GitHub, type 'github'.",
    "Hey! To learn about my skills, type 'skills'.",
    "Ah, you're here! Use 'about' to learn more about me.",
    "Hello! Ready to dive into my portfolio? Start with 'whoami'.",
    "Hey! Want to see what I’ve worked on? Just type 'projects'.",
    "Hi there! Need help? Type 'help' for all commands.",
    "Secret activated! Try typing 'odxxt' ;)",
];

pub fn skills() -> Vec<Line> {
    vec![
        Line::heading("Technical Skills:"),
        Line::blank(),
        Line::text("Security:"),
        Line::text("  • Network Security & Monitoring"),
        Line::text("  • Penetration Testing"),
        Line::text("  • Vulnerability Assessment"),
        Line::text("  • Security Frameworks (NIST, ISO)"),
        Line::blank(),
        Line::text("Tools & Technologies:"),
        Line::text("  • CrowdStrike, Splunk, Wireshark"),
        Line::text("  • Metasploit, Nessus, Burp Suite"),
        Line::text("  • Firewall Configuration"),
        Line::text("  • Cloud Security (AWS, Azure)"),
    ]
}

pub fn contact() -> Vec<Line> {
    vec![
        Line::heading("Contact Information:"),
        Line::blank(),
        Line::text("Email: contact@example.com"),
        Line::text("LinkedIn: linkedin.com/in/abdulaziz-alodat"),
        Line::text("GitHub: github.com/abdulaziz-alodat"),
        Line::blank(),
        Line::text("Feel free to reach out for collaborations or questions!"),
    ]
}

pub fn sudo() -> Vec<Line> {
    vec![
        Line::text("Permission denied: Operation not permitted"),
        Line::text("Nice try though ;)"),
    ]
}

pub fn session_terminated() -> Vec<Line> {
    vec![
        Line::text("Session terminated."),
        Line::blank(),
        Line::dim("[Process completed]"),
    ]
}

pub fn not_found(command: &str) -> Vec<Line> {
    vec![
        Line::text(format!("zsh: command not found: {}", command)),
        Line::text(HELP_HINT),
    ]
}

/// Confirmation printed before the page scrolls to `section`.
pub fn navigating(section: Section) -> &'static str {
    match section {
        Section::Top => "Navigating to top...",
        Section::About => "Navigating to About Me section...",
        Section::Tools => "Navigating to Security Toolkit section...",
        Section::Projects => "Navigating to Projects & Experiences section...",
    }
}
