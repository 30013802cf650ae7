//! The groups of the pairing. The group law is written once in [`group`], generic over the
//! field the coordinates live in, and instantiated for $\mathbb{G}_1$ and $\mathbb{G}_2$.
//! $\mathbb{G}_T$ lives in [`gt`].
pub(crate) mod g1;
pub(crate) mod g2;
pub(crate) mod group;
pub(crate) mod gt;
