//! The extension tower $\mathbb{F}_p \subset \mathbb{F}_{p^2} \subset \mathbb{F}_{p^6}
//! \subset \mathbb{F}_{p^{12}}$ of BN254, along with its scalar field $\mathbb{F}_r$.
pub mod extensions;
pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;
