use std::f32::consts::PI;
use std::fmt::Write as _;

use super::{Sector, Surface, TextRun};
use crate::color::Color;
use crate::config::SurfaceSize;
use crate::geometry::{Align, Baseline, Point, Rect};

/// Surface that builds an SVG document.
///
/// Geometry is written in logical pixels under a matching `viewBox`; the
/// outer `width`/`height` are multiplied by the scale factor so high-density
/// displays get a sharper image.
#[derive(Debug)]
pub struct SvgSurface {
    scale_factor: f32,
    size: SurfaceSize,
    body: String,
}

impl SvgSurface {
    #[must_use]
    pub fn new(scale_factor: f32) -> Self {
        Self {
            scale_factor,
            size: SurfaceSize::new(0.0, 0.0, scale_factor),
            body: String::new(),
        }
    }

    /// The complete document for the last render pass.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        let (physical_width, physical_height) = self.size.physical();
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            num(physical_width),
            num(physical_height),
            num(self.size.width),
            num(self.size.height),
            self.body
        )
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Surface for SvgSurface {
    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn clear(&mut self, size: SurfaceSize) {
        self.size = size;
        self.body.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{} />",
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            paint("fill", color)
        );
    }

    fn fill_sector(&mut self, sector: Sector, color: Color) {
        if sector.sweep_angle.abs() <= f32::EPSILON || sector.outer_radius <= 0.0 {
            return;
        }
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\"{} />",
            sector_path(&sector),
            paint("fill", color)
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        let coords: Vec<String> = points
            .iter()
            .map(|p| format!("{},{}", num(p.x), num(p.y)))
            .collect();
        let _ = writeln!(
            self.body,
            "  <polyline points=\"{}\" fill=\"none\"{} stroke-width=\"{}\" stroke-linejoin=\"round\" stroke-linecap=\"round\" />",
            coords.join(" "),
            paint("stroke", color),
            num(width)
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\"{} />",
            num(center.x),
            num(center.y),
            num(radius),
            paint("fill", color)
        );
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\"{} stroke-width=\"{}\" />",
            num(center.x),
            num(center.y),
            num(radius),
            paint("stroke", color),
            num(width)
        );
    }

    fn fill_text(&mut self, text: &TextRun) {
        let anchor = match text.align {
            Align::Left => "start",
            Align::Center => "middle",
            Align::Right => "end",
        };
        let baseline = match text.baseline {
            Baseline::Top => "hanging",
            Baseline::Middle => "middle",
            Baseline::Bottom => "text-after-edge",
        };
        let _ = writeln!(
            self.body,
            "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\"{}>{}</text>",
            num(text.position.x),
            num(text.position.y),
            num(text.size),
            paint("fill", text.color),
            escape(&text.content)
        );
    }
}

/// Path outline of a sector. Arcs are split into pieces of at most half a
/// turn so a full-circle slice still draws.
fn sector_path(sector: &Sector) -> String {
    let center = sector.center;
    let at = |radius: f32, angle: f32| {
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    };

    let sweep = sector.sweep_angle.clamp(-2.0 * PI, 2.0 * PI);
    let pieces = ((sweep.abs() / PI).ceil() as usize).max(1);
    let step = sweep / pieces as f32;
    let clockwise = u8::from(sweep > 0.0);

    let start = at(sector.outer_radius, sector.start_angle);
    let mut d = format!("M {} {}", num(start.x), num(start.y));
    for i in 1..=pieces {
        let p = at(sector.outer_radius, sector.start_angle + step * i as f32);
        let r = num(sector.outer_radius);
        let _ = write!(d, " A {r} {r} 0 0 {clockwise} {} {}", num(p.x), num(p.y));
    }

    if sector.inner_radius > 0.0 {
        let end_angle = sector.start_angle + sweep;
        let inner_end = at(sector.inner_radius, end_angle);
        let _ = write!(d, " L {} {}", num(inner_end.x), num(inner_end.y));
        let r = num(sector.inner_radius);
        for i in 1..=pieces {
            let p = at(sector.inner_radius, end_angle - step * i as f32);
            let _ = write!(d, " A {r} {r} 0 0 {} {} {}", 1 - clockwise, num(p.x), num(p.y));
        }
    } else {
        let _ = write!(d, " L {} {}", num(center.x), num(center.y));
    }
    d.push_str(" Z");
    d
}

/// ` fill="#rrggbb"` plus an opacity attribute when translucent.
fn paint(attr: &str, color: Color) -> String {
    let hex = format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b);
    if color.a == 255 {
        format!(" {attr}=\"{hex}\"")
    } else {
        format!(" {attr}=\"{hex}\" {attr}-opacity=\"{}\"", num(color.alpha()))
    }
}

/// Coordinates to at most two decimals, without trailing zeros.
fn num(v: f32) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let text = format!("{v:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
