//! Plain-text reports for aspect lists and catalogs.

mod table;

use harmonia_core::{AspectCatalog, AspectList, Movement};
use table::TextTable;

/// Glyph for an aspect name. Unknown names fall back to themselves.
pub fn aspect_symbol(name: &str) -> &str {
    match name {
        "conjunction" => "☌",
        "semi-sextile" => "⚺",
        "semi-square" => "∠",
        "sextile" => "⚹",
        "quintile" => "Q",
        "square" => "□",
        "trine" => "△",
        "sesquiquadrate" => "⚼",
        "biquintile" => "bQ",
        "quincunx" => "⚻",
        "opposition" => "☍",
        _ => name,
    }
}

/// Arrow for the temporal direction of an aspect.
pub fn movement_symbol(movement: Movement) -> &'static str {
    match movement {
        Movement::Applying => "→",
        Movement::Separating => "←",
        Movement::Static => "=",
    }
}

/// Report rendering options.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Cap on rendered rows; the title notes the truncation
    pub max_aspects: Option<usize>,
}

/// Table for aspects within one chart:
/// Point 1 / Aspect / Point 2 / Orb / Movement.
pub fn single_chart_report(aspects: &AspectList, title: &str, options: &ReportOptions) -> String {
    let (shown, title) = truncation_title(aspects.len(), title, options);
    let mut table =
        TextTable::new(&["Point 1", "Aspect", "Point 2", "Orb", "Movement"]).with_title(title);
    for aspect in aspects.iter().take(shown) {
        table.add_row(vec![
            aspect.p1_name.clone(),
            format!("{} {}", aspect_symbol(&aspect.aspect), aspect.aspect),
            aspect.p2_name.clone(),
            format!("{:+.2}°", aspect.orbit),
            format!("{} {}", movement_symbol(aspect.movement), aspect.movement),
        ]);
    }
    table.render()
}

/// Table for aspects across two charts; adds the owner columns:
/// Point 1 / Owner 1 / Aspect / Point 2 / Owner 2 / Orb / Movement.
pub fn dual_chart_report(aspects: &AspectList, title: &str, options: &ReportOptions) -> String {
    let (shown, title) = truncation_title(aspects.len(), title, options);
    let mut table = TextTable::new(&[
        "Point 1", "Owner 1", "Aspect", "Point 2", "Owner 2", "Orb", "Movement",
    ])
    .with_title(title);
    for aspect in aspects.iter().take(shown) {
        table.add_row(vec![
            aspect.p1_name.clone(),
            aspect.p1_owner.clone(),
            format!("{} {}", aspect_symbol(&aspect.aspect), aspect.aspect),
            aspect.p2_name.clone(),
            aspect.p2_owner.clone(),
            format!("{:+.2}°", aspect.orbit),
            format!("{} {}", movement_symbol(aspect.movement), aspect.movement),
        ]);
    }
    table.render()
}

/// Table of the active catalog: Aspect / Angle / Orb, plus a trailing note
/// when an axis orb override is configured.
pub fn catalog_report(catalog: &AspectCatalog) -> String {
    let mut table = TextTable::new(&["Aspect", "Angle", "Orb"]).with_title("Active Aspects");
    for definition in catalog.definitions() {
        table.add_row(vec![
            format!("{} {}", aspect_symbol(&definition.name), definition.name),
            format!("{:.0}°", definition.angle),
            format!("{:.1}°", definition.orb),
        ]);
    }
    let mut out = table.render();
    if let Some(axis_orb) = catalog.axis_orb() {
        out.push_str(&format!("Axis orb override: {:.1}°\n", axis_orb));
    }
    out
}

fn truncation_title(total: usize, title: &str, options: &ReportOptions) -> (usize, String) {
    match options.max_aspects {
        Some(max) if total > max => (max, format!("{} (showing {} of {})", title, max, total)),
        _ => (total, title.to_string()),
    }
}
