//! Shared fixtures for the workspace integration tests.

use dichotomy_core::Observer;
use dichotomy_solvers::bisection::Event;

/// A bracketed root-finding problem with a known answer.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub expression: &'static str,
    pub bracket: [f64; 2],
    pub root: f64,
}

/// Problems whose roots are known in closed form.
pub const CASES: &[Case] = &[
    Case {
        expression: "x^2 - 4",
        bracket: [0.0, 3.0],
        root: 2.0,
    },
    Case {
        expression: "x^2 - 4",
        bracket: [-3.0, 0.0],
        root: -2.0,
    },
    Case {
        expression: "sin(x)",
        bracket: [3.0, 4.0],
        root: std::f64::consts::PI,
    },
    Case {
        expression: "cos(x) - x",
        bracket: [0.0, 1.0],
        root: 0.739_085_133_215_160_6,
    },
    Case {
        expression: "exp(x) - 2",
        bracket: [0.0, 1.0],
        root: std::f64::consts::LN_2,
    },
    Case {
        expression: "cbrt(x) + 2",
        bracket: [-10.0, 0.0],
        root: -8.0,
    },
    Case {
        expression: "ctg(x)",
        bracket: [1.0, 2.0],
        root: std::f64::consts::FRAC_PI_2,
    },
    Case {
        expression: "log(x, 10) - 2",
        bracket: [50.0, 150.0],
        root: 100.0,
    },
];

/// Collects every event it observes.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Observer<Event> for &mut Recorder {
    fn observe(&mut self, event: &Event) {
        self.events.push(*event);
    }
}
