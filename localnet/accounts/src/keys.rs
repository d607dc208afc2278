use k256::elliptic_curve::sec1::ToEncodedPoint as _;
use rand::rngs::OsRng;

/// Key configurations the generator creates accounts for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AccountKeyKind {
    Ed25519,
    EcdsaSecp256k1,
    /// ECDSA key registered together with an EVM-style alias.
    EcdsaSecp256k1Alias,
}

impl AccountKeyKind {
    /// Every kind generated per run, in output order.
    pub const ALL: [Self; 3] = [
        Self::Ed25519,
        Self::EcdsaSecp256k1,
        Self::EcdsaSecp256k1Alias,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ed25519 => "ED25519",
            Self::EcdsaSecp256k1 => "ECDSA",
            Self::EcdsaSecp256k1Alias => "ECDSA (alias)",
        }
    }

    /// Whether accounts of this kind register an EVM alias.
    #[must_use]
    pub const fn uses_alias(self) -> bool {
        matches!(self, Self::EcdsaSecp256k1Alias)
    }
}

/// Freshly generated key material, hex encoded.
#[derive(Clone, Debug)]
pub struct GeneratedKey {
    kind: AccountKeyKind,
    public_key: String,
    secret_key: String,
}

impl GeneratedKey {
    /// Generate a new random key of the given kind.
    #[must_use]
    pub fn generate(kind: AccountKeyKind) -> Self {
        match kind {
            AccountKeyKind::Ed25519 => {
                let signing_key = ed25519_dalek::SigningKey::generate(&mut OsRng);
                Self {
                    kind,
                    public_key: hex::encode(signing_key.verifying_key().to_bytes()),
                    secret_key: hex::encode(signing_key.to_bytes()),
                }
            }
            AccountKeyKind::EcdsaSecp256k1 | AccountKeyKind::EcdsaSecp256k1Alias => {
                let signing_key = k256::ecdsa::SigningKey::random(&mut OsRng);
                let public = signing_key.verifying_key().to_encoded_point(true);
                Self {
                    kind,
                    public_key: hex::encode(public.as_bytes()),
                    secret_key: hex::encode(signing_key.to_bytes()),
                }
            }
        }
    }

    #[must_use]
    pub const fn kind(&self) -> AccountKeyKind {
        self.kind
    }

    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}
