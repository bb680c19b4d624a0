//! Mentoring-support doughnut chart
//!
//! egui_plot has no pie/doughnut primitive, so the ring is tessellated into
//! a mesh and painted directly.

use std::f32::consts::{FRAC_PI_2, TAU};

use egui::{vec2, Color32, Mesh, Pos2, RichText, Sense, Shape, Stroke, Ui};

use ad_core::{SummaryStats, SupportStatus, Theme};

use super::colors::support_color;
use super::{ChartData, ChartInstance, ChartKind};

const INNER_RATIO: f32 = 0.55;

/// Doughnut over exactly Yes / No / Unknown
pub struct SupportChart {
    instance: ChartInstance,
}

impl SupportChart {
    pub fn new(summary: &SummaryStats, theme: Theme) -> Self {
        let data = ChartData {
            labels: SupportStatus::ALL.iter().map(|s| s.to_string()).collect(),
            values: SupportStatus::ALL
                .iter()
                .map(|s| summary.support_count(*s) as f64)
                .collect(),
            colors: SupportStatus::ALL.iter().map(|s| support_color(*s)).collect(),
        };

        Self {
            instance: ChartInstance::new(ChartKind::Doughnut, data, theme),
        }
    }

    pub fn instance(&self) -> &ChartInstance {
        &self.instance
    }

    pub fn instance_mut(&mut self) -> &mut ChartInstance {
        &mut self.instance
    }

    /// Start and end angle of every segment, clockwise from 12 o'clock.
    /// Empty when all counts are zero.
    pub fn segment_angles(data: &ChartData) -> Vec<(f32, f32)> {
        let total = data.total();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut start = -FRAC_PI_2;
        data.values
            .iter()
            .map(|value| {
                let sweep = (*value / total) as f32 * TAU;
                let segment = (start, start + sweep);
                start += sweep;
                segment
            })
            .collect()
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let diameter = ui.available_width().min(220.0);
        self.instance.resize(vec2(diameter, diameter));

        let style = self.instance.style();
        let data = self.instance.data();

        ui.vertical_centered(|ui| {
            let (rect, response) = ui.allocate_exact_size(vec2(diameter, diameter), Sense::hover());
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let outer = diameter / 2.0 - 4.0;
            let inner = outer * INNER_RATIO;

            let segments = Self::segment_angles(data);

            if segments.is_empty() {
                painter.circle_stroke(center, (outer + inner) / 2.0, Stroke::new(outer - inner, style.grid_color));
            } else {
                let mut mesh = Mesh::default();
                for ((start, end), color) in segments.iter().zip(&data.colors) {
                    add_ring_segment(&mut mesh, center, inner, outer, *start, *end, *color);
                }
                painter.add(Shape::mesh(mesh));

                for (start, end) in &segments {
                    if end > start {
                        for angle in [*start, *end] {
                            let dir = vec2(angle.cos(), angle.sin());
                            painter.line_segment(
                                [center + dir * inner, center + dir * outer],
                                Stroke::new(2.0, style.border_color),
                            );
                        }
                    }
                }
            }

            if let Some(pointer) = response.hover_pos() {
                if let Some(idx) = segment_at(&segments, center, inner, outer, pointer) {
                    response.on_hover_text_at_pointer(format!("{}: {}", data.labels[idx], data.values[idx]));
                }
            }

            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for ((label, value), color) in data.labels.iter().zip(&data.values).zip(&data.colors) {
                    let (dot, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
                    ui.painter().circle_filled(dot.center(), 5.0, *color);
                    ui.label(RichText::new(format!("{label} ({value})")).color(style.legend_color));
                    ui.add_space(12.0);
                }
            });
        });
    }
}

fn add_ring_segment(mesh: &mut Mesh, center: Pos2, inner: f32, outer: f32, start: f32, end: f32, color: Color32) {
    let sweep = end - start;
    if sweep <= 0.0 {
        return;
    }

    let steps = ((sweep / (TAU / 128.0)).ceil() as u32).max(1);
    let base = mesh.vertices.len() as u32;

    for i in 0..=steps {
        let angle = start + sweep * i as f32 / steps as f32;
        let dir = vec2(angle.cos(), angle.sin());
        mesh.colored_vertex(center + dir * inner, color);
        mesh.colored_vertex(center + dir * outer, color);
    }

    for i in 0..steps {
        let a = base + i * 2;
        mesh.add_triangle(a, a + 1, a + 2);
        mesh.add_triangle(a + 1, a + 3, a + 2);
    }
}

/// Segment under `pointer`, if it lies on the ring
fn segment_at(segments: &[(f32, f32)], center: Pos2, inner: f32, outer: f32, pointer: Pos2) -> Option<usize> {
    let offset = pointer - center;
    let distance = offset.length();
    if distance < inner || distance > outer {
        return None;
    }

    // Normalise into the [-π/2, 3π/2) range the segments use
    let mut angle = offset.y.atan2(offset.x);
    if angle < -FRAC_PI_2 {
        angle += TAU;
    }

    segments
        .iter()
        .position(|(start, end)| angle >= *start && angle < *end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_exactly_three_fixed_categories() {
        let summary = SummaryStats {
            support_yes: Some(30),
            support_no: Some(10),
            support_unknown: None,
            ..Default::default()
        };
        let chart = SupportChart::new(&summary, Theme::Dark);
        let data = chart.instance().data();

        assert_eq!(data.labels, vec!["Yes", "No", "Unknown"]);
        assert_eq!(data.values, vec![30.0, 10.0, 0.0]);
        assert_eq!(data.colors[0], support_color(SupportStatus::Yes));
        assert_eq!(data.colors[2], Color32::from_rgb(107, 114, 128));
    }

    #[test]
    fn test_segments_cover_full_circle() {
        let summary = SummaryStats {
            support_yes: Some(1),
            support_no: Some(1),
            support_unknown: Some(2),
            ..Default::default()
        };
        let chart = SupportChart::new(&summary, Theme::Dark);
        let segments = SupportChart::segment_angles(chart.instance().data());

        assert_eq!(segments.len(), 3);
        assert!((segments[0].0 + FRAC_PI_2).abs() < 1e-6);
        assert!((segments[2].1 - (TAU - FRAC_PI_2)).abs() < 1e-4);
        assert!((segments[2].1 - segments[2].0 - TAU / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_all_zero_has_no_segments() {
        let chart = SupportChart::new(&SummaryStats::default(), Theme::Dark);
        assert!(SupportChart::segment_angles(chart.instance().data()).is_empty());
    }

    #[test]
    fn test_segment_hit_testing() {
        let segments = vec![(-FRAC_PI_2, FRAC_PI_2), (FRAC_PI_2, TAU - FRAC_PI_2)];
        let center = pos2(100.0, 100.0);

        // Right of centre lies in the first half, left in the second
        assert_eq!(segment_at(&segments, center, 20.0, 50.0, pos2(140.0, 100.0)), Some(0));
        assert_eq!(segment_at(&segments, center, 20.0, 50.0, pos2(60.0, 100.0)), Some(1));
        // Hole and outside miss
        assert_eq!(segment_at(&segments, center, 20.0, 50.0, pos2(105.0, 100.0)), None);
        assert_eq!(segment_at(&segments, center, 20.0, 50.0, pos2(200.0, 100.0)), None);
    }
}
