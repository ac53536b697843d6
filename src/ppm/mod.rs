// Prediction by Partial Matching (PPM) Bit-Length Estimation
//
// An adaptive order-k context model predicts every symbol from the up-to-k
// symbols before it, escaping to shorter contexts when the symbol has not
// been seen in the longer one. The sum of the self-information of every
// prediction is the number of bits an arithmetic coder driven by this model
// would emit, which the NCD engine uses as a compressed-length proxy.
//
// Scientific Foundation:
// [1] Cleary, J. G., & Witten, I. H. (1984). Data compression using adaptive
//     coding and partial string matching. IEEE Transactions on Communications.
// [2] Moffat, A. (1990). Implementing the PPM data compression scheme.
//     (PPMC escape estimation: escape count = number of distinct symbols)
//
// Only the bit length is produced; no codestream is written.

mod context;
mod model;

pub use context::ContextTable;
pub use model::{compressed_bits, PpmConfig, PpmModel};

#[cfg(test)]
mod tests;
