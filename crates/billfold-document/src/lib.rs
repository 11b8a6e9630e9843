// SPDX-License-Identifier: MIT
//
// billfold-document — Table pagination and document assembly.
//
// Lays an arbitrary-length item sequence out over fixed-size A4 pages:
// decides page breaks, repeats the header/customer/table-header blocks
// across breaks, inserts continuation markers, and anchors the totals and
// signed-QR blocks below the last rendered row. Everything draws through
// the `PageCanvas` abstraction from billfold-render.

mod blocks;
mod columns;
mod layout;
mod totals;

#[cfg(test)]
pub(crate) mod testutil;

pub mod assemble;
pub mod table;

pub use assemble::DocumentAssembler;
pub use table::PaginationEngine;
