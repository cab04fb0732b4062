//! Interaction scripts.
//!
//! A script is a whitespace-separated list of steps:
//!
//! ```text
//! toggle wait:0.4 hover:1 wait:0.2 hover:2 leave:1 settle toggle settle
//! ```

use std::str::FromStr;

use thiserror::Error;

/// One scripted step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Activate the toggle.
    Toggle,
    /// Pointer enters nav item.
    Hover(usize),
    /// Pointer leaves nav item.
    Leave(usize),
    /// Pointer enters social link.
    Social(usize),
    /// Pointer leaves social link.
    Unsocial(usize),
    /// Pointer moves to a screen position.
    Move(f32, f32),
    /// Left click at a screen position.
    Click(f32, f32),
    /// Change the current route.
    Route(String),
    /// Advance time by this many seconds.
    Wait(f32),
    /// Advance until nothing moves.
    Settle,
}

/// Why a step did not parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("bad script step `{step}`: {reason}")]
pub struct ParseStepError {
    step: String,
    reason: &'static str,
}

fn point(step: &str, arg: &str) -> Result<(f32, f32), ParseStepError> {
    let bad = || ParseStepError {
        step: step.to_string(),
        reason: "expected x,y",
    };
    let (x, y) = arg.split_once(',').ok_or_else(bad)?;
    Ok((
        x.trim().parse().map_err(|_| bad())?,
        y.trim().parse().map_err(|_| bad())?,
    ))
}

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(step: &str) -> Result<Self, Self::Err> {
        let error = |reason| ParseStepError {
            step: step.to_string(),
            reason,
        };
        let index = |arg: &str| arg.parse::<usize>().map_err(|_| error("expected an index"));

        let (name, arg) = step.split_once(':').unwrap_or((step, ""));
        match name {
            "toggle" => Ok(Self::Toggle),
            "settle" => Ok(Self::Settle),
            "hover" => Ok(Self::Hover(index(arg)?)),
            "leave" => Ok(Self::Leave(index(arg)?)),
            "social" => Ok(Self::Social(index(arg)?)),
            "unsocial" => Ok(Self::Unsocial(index(arg)?)),
            "move" => point(step, arg).map(|(x, y)| Self::Move(x, y)),
            "click" => point(step, arg).map(|(x, y)| Self::Click(x, y)),
            "route" if !arg.is_empty() => Ok(Self::Route(arg.to_string())),
            "route" => Err(error("expected a route")),
            "wait" => match arg.parse::<f32>() {
                Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(Self::Wait(seconds)),
                _ => Err(error("expected seconds")),
            },
            _ => Err(error("unknown step")),
        }
    }
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns the first step that does not parse.
pub fn parse(script: &str) -> Result<Vec<Step>, ParseStepError> {
    script.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let steps = parse("toggle wait:0.5 hover:1 leave:1 route:/about move:10,20 settle").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Toggle,
                Step::Wait(0.5),
                Step::Hover(1),
                Step::Leave(1),
                Step::Route("/about".to_string()),
                Step::Move(10.0, 20.0),
                Step::Settle,
            ]
        );
    }

    #[test]
    fn test_bad_steps() {
        assert!(parse("hover").is_err());
        assert!(parse("wait:-1").is_err());
        assert!(parse("click:3").is_err());
        assert!(parse("jump").is_err());
        assert!(parse("route:").is_err());
    }

    #[test]
    fn test_empty_script() {
        assert!(parse("  ").unwrap().is_empty());
    }
}
