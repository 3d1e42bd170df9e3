//! Visual styling for the equalizer editor.

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};

/// Theme colors for the editor.
pub struct Theme {
    /// Main window background color.
    pub background: Color32,
    /// Plot area background color.
    pub plot_bg: Color32,
    /// Panel/frame background color.
    pub panel_bg: Color32,
    /// Primary accent color for active elements.
    pub accent: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
    /// Knob background track color.
    pub knob_track: Color32,
    /// Composite response curve color.
    pub aggregate_curve: Color32,
    /// Per-band curve and frame colors, cycled by band index.
    pub band_colors: [Color32; 6],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(25, 25, 30),
            plot_bg: Color32::from_rgb(20, 20, 25),
            panel_bg: Color32::from_rgb(35, 35, 42),
            accent: Color32::from_rgb(100, 180, 255),
            text_primary: Color32::from_rgb(230, 230, 235),
            text_secondary: Color32::from_rgb(150, 150, 160),
            knob_track: Color32::from_rgb(50, 50, 60),
            aggregate_curve: Color32::from_rgb(192, 192, 200),
            band_colors: [
                Color32::from_rgb(90, 140, 255),  // Lowest
                Color32::from_rgb(190, 130, 80),  // Low
                Color32::from_rgb(90, 200, 110),  // Low Mids
                Color32::from_rgb(240, 130, 110), // High Mids
                Color32::from_rgb(245, 170, 70),  // High
                Color32::from_rgb(230, 80, 90),   // Highest
            ],
        }
    }
}

impl Theme {
    /// Color for a band's curve and frame. Deterministic and stable for a
    /// given index; indices beyond the table cycle.
    pub fn band_color(&self, index: usize) -> Color32 {
        self.band_colors[index % self.band_colors.len()]
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let mut visuals = Visuals::dark();
        visuals.window_fill = self.panel_bg;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.plot_bg;

        visuals.widgets.noninteractive.bg_fill = self.panel_bg;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);

        visuals.widgets.inactive.bg_fill = Color32::from_rgb(45, 45, 55);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(4);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(55, 55, 68);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(4);

        visuals.widgets.active.bg_fill = Color32::from_rgb(65, 65, 80);
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.accent);
        visuals.widgets.active.corner_radius = CornerRadius::same(4);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(6.0, 4.0);
        style.spacing.button_padding = egui::vec2(6.0, 3.0);

        ctx.set_style(style);
    }
}
