//! Copy and asset references rendered by the section components.

pub const SITE_NAME: &str = "TUKUNA FOR MARS";
pub const LOGO: &str = "/logo-animated.svg";
pub const PROTOTYPE_PHOTO: &str = "/prototype.jpg";

pub struct Pillar {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PILLARS: &[Pillar] = &[
    Pillar {
        icon: "🚀",
        title: "Orbital Regeneration",
        description: "Harvest defunct satellites and debris to prevent Kessler Syndrome and reclaim raw materials.",
    },
    Pillar {
        icon: "🌱",
        title: "Martian Sustainability",
        description: "Convert space waste into oxygen, water, metals, and polymers for Mars habitats and agriculture.",
    },
    Pillar {
        icon: "🌍",
        title: "Interplanetary Loop",
        description: "Create a closed-loop economy between Earth orbit, the Moon, and Mars by 2030.",
    },
];

pub struct Agent {
    pub name: &'static str,
    pub specialty: &'static str,
    pub stats: &'static str,
}

pub const AGENTS: &[Agent] = &[
    Agent {
        name: "TUKUNA-α",
        specialty: "Debris Capture & Sorting",
        stats: "AI vision + magnetic nets",
    },
    Agent {
        name: "TUKUNA-β",
        specialty: "In-Orbit Smelting",
        stats: "Solar-powered plasma furnace",
    },
    Agent {
        name: "TUKUNA-γ",
        specialty: "Mars Surface Replication",
        stats: "3D-prints habitats from recycled alloys",
    },
];

/// (label, value) rows on the prototype card.
pub const PROTOTYPE_STATUS: &[(&str, &str)] = &[
    ("Status", "In Testing Phase"),
    ("Launch Date", "Q3 2025"),
    ("Mission", "Orbital + Surface"),
];

pub struct Render {
    pub src: &'static str,
    pub caption: &'static str,
}

pub const RENDERS: &[Render] = &[
    Render { src: "/renders/head.jpg", caption: "Sensor head" },
    Render { src: "/renders/arm.jpg", caption: "Capture arm" },
    Render { src: "/renders/furnace.jpg", caption: "Plasma furnace" },
    Render { src: "/renders/chassis.jpg", caption: "Rover chassis" },
];

pub const SPONSORS: &[&str] = &["NASA", "ESA", "Mars Society", "SpaceX"];

pub struct DiagramNode {
    pub title: &'static str,
    pub detail: &'static str,
    pub note: Option<&'static str>,
}

const fn node(title: &'static str, detail: &'static str, note: Option<&'static str>) -> DiagramNode {
    DiagramNode { title, detail, note }
}

/// Rows line up across the three columns: material → process → product.
pub const RAW_MATERIALS: &[DiagramNode] = &[
    node("1. Metals", "Aluminum, scrap, frames", None),
    node("2. Plastics", "PET, PP, PE, PLA, foams", None),
    node("3. Textiles & Fibers", "Clothing, Nomex, polyester", None),
    node("4. Carbonaceous / Exp.", "Char, nitrile gloves, filters", None),
    node("5. Regolith", "Plagioclase, pyroxene, olivine", Some("Base for geopolymers, sintering")),
];

pub const PROCESSES: &[DiagramNode] = &[
    node(
        "Degreasing → CNC Cutting → Casting",
        "Ultrasonic baths · Cutter · Furnace (crucible)",
        None,
    ),
    node(
        "Washing → Shredding → Extrusion",
        "Solar drying · Granulator · Modular extruder",
        Some("Filament / pellets for 3D printing"),
    ),
    node(
        "Shredding → Carding → Paneling",
        "Carder · Thermal setting press · Non-woven",
        Some("Insulators · Fillers · Composite reinforcements"),
    ),
    node(
        "Pyrolysis → Activation → Post-proc.",
        "Anoxic reactor · Condenser · Activator (steam)",
        Some("Char, activated carbon, composite additive"),
    ),
    node(
        "Solar Concentrator → Sintering / Melting",
        "Paraboloid / solar oven · Sintering chamber",
        Some("Blocks, molds, geopolymers, glass"),
    ),
];

pub const PRODUCTS: &[DiagramNode] = &[
    node("Metals → Tools & Cast Parts", "Wrenches, supports, bushings", None),
    node("Plastics → Filament / 3D Parts", "Casings, utility parts, containers", None),
    node("Textiles → Insulators / Fillers", "Blankets, insulating panels, padding", None),
    node("Carbonaceous → Activated Carbon / Char", "Filters, adsorbents, composite additive", None),
    node("Regolith → Blocks / Geopolymers", "Walls, molds, vitreous ornamentation", None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_columns_align() {
        assert_eq!(RAW_MATERIALS.len(), PROCESSES.len());
        assert_eq!(PROCESSES.len(), PRODUCTS.len());
    }

    #[test]
    fn test_render_sources_are_unique() {
        for (i, a) in RENDERS.iter().enumerate() {
            assert!(a.src.starts_with("/renders/"));
            assert!(RENDERS[i + 1..].iter().all(|b| b.src != a.src));
        }
    }
}
