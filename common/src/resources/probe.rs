/// Number of echo requests sent per probe.
pub const ECHO_COUNT: u8 = 3;

/// Tail of the `ping` statistics line reporting the loss percentage.
const LOSS_SUFFIX: &str = "% packet loss";

/// Outcome of one attacker to target reachability check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    /// Address the probe was sent to.
    pub target: String,
    pub reachable: bool,
}

impl ProbeResult {
    /// Interprets the captured output of a `ping` run against `target`.
    pub fn from_output(target: impl Into<String>, output: &str) -> Self {
        Self {
            target: target.into(),
            reachable: reports_zero_loss(output),
        }
    }
}

/// Whether `output` reports zero-percent packet loss.
///
/// The percentage in front of the marker is read as a number, so
/// `100% packet loss` is not mistaken for `0% packet loss`.
pub fn reports_zero_loss(output: &str) -> bool {
    output.match_indices(LOSS_SUFFIX).any(|(idx, _)| {
        let head = &output[..idx];
        let digits = head
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .count();
        head[head.len() - digits..]
            .parse::<f64>()
            .is_ok_and(|loss| loss == 0.0)
    })
}
