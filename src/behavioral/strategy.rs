//! # Strategy
//!
//! Shapes delegate painting to an interchangeable [`Brush`]. The shape decides *what*
//! is drawn, and the brush decides *how* it is painted.

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use tracing::debug;

use crate::error::Result;

pub trait Brush {
    fn paint(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SolidBrush;

impl Brush for SolidBrush {
    fn paint(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paint with single color")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LinearGradientBrush;

impl Brush for LinearGradientBrush {
    fn paint(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Linear paint with multiple colors")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RadialGradientBrush;

impl Brush for RadialGradientBrush {
    fn paint(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Radial paint with multiple colors")?;
        Ok(())
    }
}

pub trait Shape {
    fn draw(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct Rectangle {
    brush: Rc<dyn Brush>,
}

impl Rectangle {
    pub fn new(brush: Rc<dyn Brush>) -> Self {
        Self { brush }
    }

    pub fn set_brush(&mut self, brush: Rc<dyn Brush>) {
        self.brush = brush;
    }
}

impl Shape for Rectangle {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        self.brush.paint(out)?;
        writeln!(out, "Rectangle")?;
        Ok(())
    }
}

pub struct Circle {
    brush: Rc<dyn Brush>,
}

impl Circle {
    pub fn new(brush: Rc<dyn Brush>) -> Self {
        Self { brush }
    }

    pub fn set_brush(&mut self, brush: Rc<dyn Brush>) {
        self.brush = brush;
    }
}

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        self.brush.paint(out)?;
        writeln!(out, "Circle")?;
        Ok(())
    }
}

/// Brushes by name: `solid`, `linear` and `radial`.
pub struct BrushBox {
    brushes: HashMap<&'static str, Rc<dyn Brush>>,
}

impl BrushBox {
    pub fn new() -> Self {
        let mut brushes: HashMap<&'static str, Rc<dyn Brush>> = HashMap::new();
        brushes.insert("solid", Rc::new(SolidBrush));
        brushes.insert("linear", Rc::new(LinearGradientBrush));
        brushes.insert("radial", Rc::new(RadialGradientBrush));
        Self { brushes }
    }

    pub fn get(&self, name: &str) -> Option<Rc<dyn Brush>> {
        let brush = self.brushes.get(name).cloned();
        debug!(brush = name, found = brush.is_some(), "Brush lookup");
        brush
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.brushes.keys().copied()
    }
}

impl Default for BrushBox {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let solid: Rc<dyn Brush> = Rc::new(SolidBrush);
    let linear: Rc<dyn Brush> = Rc::new(LinearGradientBrush);
    let radial: Rc<dyn Brush> = Rc::new(RadialGradientBrush);

    Rectangle::new(solid).draw(out)?;

    writeln!(out, "----------------------------------")?;

    Rectangle::new(linear).draw(out)?;

    writeln!(out, "----------------------------------")?;

    Circle::new(radial).draw(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &dyn Shape) -> String {
        let mut out = Vec::new();
        shape.draw(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_brush_paints_before_shape_name() {
        let circle = Circle::new(Rc::new(SolidBrush));
        assert_eq!(render(&circle), "Paint with single color\nCircle\n");
    }

    #[test]
    fn test_swapping_brush_changes_only_the_paint() {
        let brushes = BrushBox::new();
        let mut rectangle = Rectangle::new(brushes.get("solid").unwrap());
        rectangle.set_brush(brushes.get("radial").unwrap());
        assert_eq!(render(&rectangle), "Radial paint with multiple colors\nRectangle\n");
    }

    #[test]
    fn test_brush_box_lookup() {
        let brushes = BrushBox::new();
        let mut names: Vec<&str> = brushes.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["linear", "radial", "solid"]);
        assert!(brushes.get("spray").is_none());
    }
}
