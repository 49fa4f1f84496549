// src/solver/status.rs

use std::fmt;

use good_lp::ResolutionError;

/// Solver verdict, surfaced verbatim to the caller.
///
/// A plan exists only for `Optimal` and `Feasible`; everything else is
/// terminal. The bundled `microlp` backend only ever reports proven-optimal
/// solutions, so `Feasible` (found a point, optimality unproven) and
/// `NotSolved` are kept for backends that emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Unbounded,
    Abnormal,
    NotSolved,
}

impl SolveStatus {
    /// Whether variable values may be read for this status.
    pub fn has_solution(self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Feasible => "FEASIBLE",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::Unbounded => "UNBOUNDED",
            SolveStatus::Abnormal => "ABNORMAL",
            SolveStatus::NotSolved => "NOT_SOLVED",
        };
        f.write_str(name)
    }
}

impl From<ResolutionError> for SolveStatus {
    fn from(err: ResolutionError) -> Self {
        match err {
            ResolutionError::Infeasible => SolveStatus::Infeasible,
            ResolutionError::Unbounded => SolveStatus::Unbounded,
            ResolutionError::Other(_) | ResolutionError::Str(_) => SolveStatus::Abnormal,
        }
    }
}
