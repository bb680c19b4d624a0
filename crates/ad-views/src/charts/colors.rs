//! Fixed chart palettes

use egui::Color32;

use ad_core::SupportStatus;

/// Batch bar palette, cycled when there are more than ten batches
pub const BATCH_PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 184, 205),  // #1FB8CD
    Color32::from_rgb(255, 193, 133), // #FFC185
    Color32::from_rgb(180, 65, 60),   // #B4413C
    Color32::from_rgb(236, 235, 213), // #ECEBD5
    Color32::from_rgb(93, 135, 143),  // #5D878F
    Color32::from_rgb(219, 69, 69),   // #DB4545
    Color32::from_rgb(210, 186, 76),  // #D2BA4C
    Color32::from_rgb(150, 67, 37),   // #964325
    Color32::from_rgb(148, 68, 84),   // #944454
    Color32::from_rgb(19, 52, 59),    // #13343B
];

/// Colour of the `index`-th batch bar
pub fn batch_color(index: usize) -> Color32 {
    BATCH_PALETTE[index % BATCH_PALETTE.len()]
}

/// Bar outline: the fill colour at half opacity
pub fn outline_color(fill: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), 128)
}

/// Fixed colour of each support category
pub fn support_color(status: SupportStatus) -> Color32 {
    match status {
        SupportStatus::Yes => Color32::from_rgb(16, 185, 129),     // #10b981
        SupportStatus::No => Color32::from_rgb(239, 68, 68),       // #ef4444
        SupportStatus::Unknown => Color32::from_rgb(107, 114, 128), // #6b7280
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(batch_color(0), batch_color(10));
        assert_eq!(batch_color(3), Color32::from_rgb(236, 235, 213));
        assert_ne!(batch_color(0), batch_color(1));
    }

    #[test]
    fn test_outline_keeps_rgb() {
        let outline = outline_color(Color32::from_rgb(31, 184, 205));
        assert_eq!(outline.a(), 128);
    }
}
