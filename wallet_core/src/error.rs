use ember_mnemonic::MnemonicError;
use ember_verification::VerificationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("recovery phrase error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("verification error: {0}")]
    Verification(#[from] VerificationError),
}
