//! Static barbecue tips shown on the tips page.

/// One tip card: a title, a short description, and an icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The tips, in display order.
pub const TIPS: [Tip; 5] = [
    Tip {
        title: "Temperature Control",
        description: "Maintain a consistent temperature between 225-250°F (107-121°C) for most meats. Use a good quality thermometer to monitor both the grill and meat temperature.",
        icon: "🌡️",
    },
    Tip {
        title: "Wood Selection",
        description: "Choose the right wood for your meat. Hickory and oak are great for beef, while fruit woods like apple and cherry work well with pork and poultry.",
        icon: "🪵",
    },
    Tip {
        title: "The 3-2-1 Method",
        description: "For perfect ribs: 3 hours unwrapped, 2 hours wrapped in foil, 1 hour unwrapped with sauce. This creates tender, fall-off-the-bone ribs.",
        icon: "⏱️",
    },
    Tip {
        title: "Rest Your Meat",
        description: "Always let your meat rest for 10-15 minutes after cooking. This allows the juices to redistribute, making your meat more tender and juicy.",
        icon: "⏳",
    },
    Tip {
        title: "Clean Your Grill",
        description: "Keep your grill grates clean and oiled. This prevents sticking and ensures even cooking. Clean while the grill is hot for easier maintenance.",
        icon: "🧹",
    },
];
