//! Rotary knob control widget.
//!
//! Drag vertically to adjust, Shift for fine control, double-click to
//! reset to the parameter's default. The knob works in the parameter's
//! normalized space, so logarithmic parameters (frequency, quality) get
//! their skew from the descriptor rather than from widget-side math.

use banda_core::{ParamDescriptor, ParamScale, ParamUnit};
use egui::{Color32, Pos2, Response, Sense, Stroke, Ui, Widget, pos2, vec2};
use std::f32::consts::PI;

/// Rotary knob bound to one parameter value.
pub struct Knob<'a> {
    value: &'a mut f32,
    desc: &'a ParamDescriptor,
    label: &'a str,
    diameter: f32,
    sensitivity: f32,
}

impl<'a> Knob<'a> {
    /// Create a knob for `value`, ranged and formatted per `desc`.
    pub fn new(value: &'a mut f32, desc: &'a ParamDescriptor, label: &'a str) -> Self {
        Self {
            value,
            desc,
            label,
            diameter: 48.0,
            sensitivity: 0.004,
        }
    }

    /// Set knob diameter in pixels.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter.max(16.0);
        self
    }

    /// Set sensitivity (normalized change per pixel dragged).
    pub fn sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    fn format_value(&self) -> String {
        let v = *self.value;
        match self.desc.unit {
            ParamUnit::Hertz => {
                if v >= 1000.0 {
                    format!("{:.2} kHz", v / 1000.0)
                } else {
                    format!("{v:.0} Hz")
                }
            }
            ParamUnit::Decibels => format!("{v:+.1} dB"),
            ParamUnit::None => match self.desc.scale {
                ParamScale::Logarithmic => format!("{v:.2}"),
                ParamScale::Linear => format!("{v:.1}"),
            },
        }
    }
}

impl Widget for Knob<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = vec2(self.diameter, self.diameter + 28.0); // room for label + value
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let center = pos2(rect.center().x, rect.top() + self.diameter / 2.0);
        let radius = self.diameter / 2.0 - 3.0;

        let mut changed = false;

        if response.double_clicked() {
            *self.value = self.desc.default;
            changed = true;
        }

        if response.dragged() {
            let sensitivity = if ui.input(|i| i.modifiers.shift) {
                self.sensitivity * 0.1
            } else {
                self.sensitivity
            };
            // Vertical drag moves the normalized position; the descriptor's
            // scale turns that into the skewed plain value.
            let normalized = self.desc.normalize(*self.value);
            let next = (normalized - response.drag_delta().y * sensitivity).clamp(0.0, 1.0);
            *self.value = self.desc.clamp(self.desc.denormalize(next));
            changed = true;
        }

        let is_active = response.dragged() || response.has_focus();
        let enabled = ui.is_enabled();

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            // 270-degree sweep from bottom-left to bottom-right.
            let start_angle = PI * 0.75;
            let end_angle = PI * 2.25;
            let sweep = end_angle - start_angle;

            let normalized = self.desc.normalize(*self.value).clamp(0.0, 1.0);
            let value_angle = start_angle + normalized * sweep;

            let track_color = Color32::from_rgb(50, 50, 60);
            let fill_color = if !enabled {
                Color32::from_rgb(70, 70, 82)
            } else if is_active {
                Color32::from_rgb(120, 200, 255)
            } else {
                Color32::from_rgb(100, 180, 255)
            };
            let text_color = if enabled {
                Color32::from_rgb(180, 180, 190)
            } else {
                Color32::from_rgb(110, 110, 120)
            };

            draw_arc(painter, center, radius - 2.0, start_angle, end_angle, track_color, 4.0);
            if normalized > 0.001 {
                draw_arc(painter, center, radius - 2.0, start_angle, value_angle, fill_color, 4.0);
            }

            let body_color = if is_active {
                Color32::from_rgb(65, 65, 78)
            } else {
                Color32::from_rgb(55, 55, 68)
            };
            painter.circle_filled(center, radius - 6.0, body_color);

            let pointer_len = radius - 9.0;
            let pointer_end = pos2(
                center.x + value_angle.cos() * pointer_len,
                center.y + value_angle.sin() * pointer_len,
            );
            painter.line_segment([center, pointer_end], Stroke::new(2.0, fill_color));

            painter.text(
                pos2(rect.center().x, center.y + radius + 3.0),
                egui::Align2::CENTER_TOP,
                self.label,
                egui::FontId::proportional(10.0),
                text_color,
            );
            painter.text(
                pos2(rect.center().x, center.y + radius + 14.0),
                egui::Align2::CENTER_TOP,
                self.format_value(),
                egui::FontId::proportional(9.0),
                text_color,
            );
        }

        if changed {
            response.mark_changed();
        }

        response
    }
}

/// Draw an arc using line segments.
fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: Color32,
    stroke_width: f32,
) {
    let segments = 32;
    let sweep = end_angle - start_angle;

    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = start_angle + t * sweep;
            pos2(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], Stroke::new(stroke_width, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banda_core::{BandParam, ParamKey, descriptor};

    #[test]
    fn formats_frequency_with_khz_break() {
        let desc = descriptor(ParamKey::band(0, BandParam::Frequency));
        let mut low = 440.0;
        let knob = Knob::new(&mut low, &desc, "Freq");
        assert_eq!(knob.format_value(), "440 Hz");

        let mut high = 2_500.0;
        let knob = Knob::new(&mut high, &desc, "Freq");
        assert_eq!(knob.format_value(), "2.50 kHz");
    }

    #[test]
    fn formats_gain_with_sign() {
        let desc = descriptor(ParamKey::band(0, BandParam::Gain));
        let mut value = -3.5;
        let knob = Knob::new(&mut value, &desc, "Gain");
        assert_eq!(knob.format_value(), "-3.5 dB");

        let mut value = 6.0;
        let knob = Knob::new(&mut value, &desc, "Gain");
        assert_eq!(knob.format_value(), "+6.0 dB");
    }

    #[test]
    fn diameter_has_floor() {
        let desc = descriptor(ParamKey::Output);
        let mut value = 0.0;
        let knob = Knob::new(&mut value, &desc, "Out").diameter(2.0);
        assert!(knob.diameter >= 16.0);
    }
}
