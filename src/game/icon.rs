/// Icon shapes. A closed set; the renderer matches on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Donut,
    Square,
    Diamond,
    Triangle,
    Circle,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Donut,
        Shape::Square,
        Shape::Diamond,
        Shape::Triangle,
        Shape::Circle,
    ];
}

/// The fixed icon palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconColor {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Cyan,
}

impl IconColor {
    pub const ALL: [IconColor; 7] = [
        IconColor::Red,
        IconColor::Green,
        IconColor::Blue,
        IconColor::Yellow,
        IconColor::Orange,
        IconColor::Purple,
        IconColor::Cyan,
    ];
}

/// What a box shows when turned face-up. Matching compares the whole value,
/// shape and color both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Icon {
    pub shape: Shape,
    pub color: IconColor,
}
