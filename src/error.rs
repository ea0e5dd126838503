// Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Errors reported by graph modifications.

use thiserror::Error;

/// Error when modifying a graph.
///
/// Queries never fail: unknown nodes simply have no neighbors and
/// unreachable targets are reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge was given a negative weight.
    ///
    /// The graph is left unchanged.
    #[error("invalid weight {weight} for edge {from} - {to}: weights must be non-negative")]
    InvalidWeight { from: String, to: String, weight: String },
}

pub type Result<T> = std::result::Result<T, Error>;
