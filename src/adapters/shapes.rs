use crate::domain::model::Drawing;
use crate::domain::ports::Shape;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_negative;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        validate_non_negative("circle.radius", radius)?;
        Ok(Self { radius })
    }
}

impl Shape for Circle {
    fn draw(&self) -> Result<Drawing> {
        Ok(Drawing {
            shape: "circle".to_string(),
            description: format!("radius {}", self.radius),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Result<Self> {
        validate_non_negative("square.side", side)?;
        Ok(Self { side })
    }
}

impl Shape for Square {
    fn draw(&self) -> Result<Drawing> {
        Ok(Drawing {
            shape: "square".to_string(),
            description: format!("side {}", self.side),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        validate_non_negative("rectangle.width", width)?;
        validate_non_negative("rectangle.height", height)?;
        Ok(Self { width, height })
    }
}

impl Shape for Rectangle {
    fn draw(&self) -> Result<Drawing> {
        Ok(Drawing {
            shape: "rectangle".to_string(),
            description: format!("{} x {}", self.width, self.height),
        })
    }
}
