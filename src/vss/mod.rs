mod decryption;
mod distribution;
mod recovery;
mod verification;

pub use decryption::{decrypt_share, decrypt_shares, encrypted_shares_of};
pub use distribution::generate_shared_secret;
pub use recovery::{flatten_shares, recover_secret, ReportedShares, Roster};
pub use verification::{verify_decrypted_share, verify_encrypted_shares, verify_secret};
