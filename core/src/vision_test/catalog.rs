use serde::Serialize;

/// One screening question. Answers are compared case-insensitively against
/// `normal_answer` and `red_green_answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestQuestion {
    pub id: u32,
    pub prompt: &'static str,
    pub colors: &'static [&'static str],
    pub options: &'static [&'static str],
    pub normal_answer: &'static str,
    pub red_green_answer: Option<&'static str>,
    pub accessibility_description: &'static str,
}

static CATALOG: [TestQuestion; 5] = [
    TestQuestion {
        id: 1,
        prompt: "What two colors do you see in these circles?",
        colors: &["red", "green"],
        options: &["Red and Green", "Brown and Brown", "Green and Red", "I'm not sure"],
        normal_answer: "Red and Green",
        red_green_answer: Some("Brown and Brown"),
        accessibility_description: "Two circles side by side, the left one red and the right one green.",
    },
    TestQuestion {
        id: 2,
        prompt: "Which light is on in this traffic signal?",
        colors: &["gray", "yellow", "gray"],
        options: &["Top", "Middle", "Bottom", "I can't tell"],
        normal_answer: "Middle",
        red_green_answer: None,
        accessibility_description: "A vertical traffic signal with only the middle lamp lit in yellow.",
    },
    TestQuestion {
        id: 3,
        prompt: "What number do you see in the dotted circle?",
        colors: &["orange", "olive"],
        options: &["74", "21", "No number", "Not sure"],
        normal_answer: "74",
        red_green_answer: Some("21"),
        accessibility_description: "A circle of orange dots forming a number on a background of olive dots.",
    },
    TestQuestion {
        id: 4,
        prompt: "What color is the lit lamp?",
        colors: &["red"],
        options: &["Red", "Yellow", "Green", "Can't tell"],
        normal_answer: "Red",
        red_green_answer: Some("Yellow"),
        accessibility_description: "A single round lamp glowing red.",
    },
    TestQuestion {
        id: 5,
        prompt: "What color is this signal light?",
        colors: &["green"],
        options: &["Green", "Brown", "White", "Not sure"],
        normal_answer: "Green",
        red_green_answer: Some("Brown"),
        accessibility_description: "A single round lamp glowing green.",
    },
];

/// The built-in screening battery, in presentation order.
pub fn catalog() -> &'static [TestQuestion] {
    &CATALOG
}

pub fn question(id: u32) -> Option<&'static TestQuestion> {
    CATALOG.iter().find(|question| question.id == id)
}
