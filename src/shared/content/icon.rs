// src/shared/content/icon.rs

use std::str::FromStr;

crate::label_enum! {
    /// Icon names the front end knows how to draw.
    pub enum Icon: "icon" {
        Gamepad2 => "Gamepad2",
        Film => "Film",
        Code => "Code",
        BookOpen => "BookOpen",
        Palette => "Palette",
        Music => "Music",
        Coffee => "Coffee",
        Globe => "Globe",
        Cpu => "Cpu",
        Lightbulb => "Lightbulb",
        Video => "Video",
        Mail => "Mail",
        Phone => "Phone",
        MapPin => "MapPin",
        Github => "Github",
        Linkedin => "Linkedin",
        MessageCircle => "MessageCircle",
        Calendar => "Calendar",
    }
}

impl Icon {
    /// Rows written before the icon set was closed may hold any string.
    pub fn from_stored(value: &str) -> Icon {
        Icon::from_str(value.trim()).unwrap_or_else(|_| {
            tracing::debug!("Unknown stored icon '{}', falling back to Code", value);
            Icon::Code
        })
    }
}
