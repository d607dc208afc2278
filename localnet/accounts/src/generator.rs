use tracing::info;

use crate::{
    client::{AccountService, AccountServiceError, CreateAccountRequest},
    keys::{AccountKeyKind, GeneratedKey},
};

/// Starting balance of every generated account, in the network's smallest
/// denomination.
const INITIAL_BALANCE: u64 = 10_000_000_000;

/// Accounts created per key kind during one generation run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerationSummary {
    created: Vec<(AccountKeyKind, u32)>,
}

impl GenerationSummary {
    #[must_use]
    pub fn created(&self) -> &[(AccountKeyKind, u32)] {
        &self.created
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.created.iter().map(|(_, count)| count).sum()
    }
}

/// Create `count` accounts of every key kind against the network, printing
/// the generated credentials.
///
/// The first failure aborts the remainder of the run; accounts that were
/// already created are not rolled back.
pub async fn generate_accounts<S>(
    service: &S,
    count: u32,
) -> Result<GenerationSummary, AccountServiceError>
where
    S: AccountService + ?Sized,
{
    let mut summary = GenerationSummary::default();

    for kind in AccountKeyKind::ALL {
        info!(kind = kind.label(), count, "generating accounts");
        print_kind_header(kind);

        for _ in 0..count {
            let key = GeneratedKey::generate(kind);
            let request = CreateAccountRequest {
                key_kind: kind.label(),
                public_key: key.public_key().to_owned(),
                initial_balance: INITIAL_BALANCE,
                evm_alias: kind.uses_alias(),
            };
            let account = service.create_account(request).await?;
            println!(
                "| {} - 0x{} - {} |",
                account.account_id,
                key.secret_key(),
                account.balance
            );
        }

        summary.created.push((kind, count));
    }

    Ok(summary)
}

fn print_kind_header(kind: AccountKeyKind) {
    println!("|-----------------------------------------------------------------------------|");
    println!("| Accounts list ({} keys)", kind.label());
    println!("|    id    |                     private key                     |   balance   |");
    println!("|-----------------------------------------------------------------------------|");
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::generate_accounts;
    use crate::{
        client::{AccountService, AccountServiceError, CreateAccountRequest, CreatedAccount},
        keys::AccountKeyKind,
    };

    /// Records every request and optionally fails after a fixed number.
    struct RecordingService {
        calls: Mutex<Vec<CreateAccountRequest>>,
        fail_after: Option<usize>,
    }

    impl RecordingService {
        fn new(fail_after: Option<usize>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_after,
            }
        }

        fn calls(&self) -> Vec<CreateAccountRequest> {
            self.calls.lock().expect("lock").clone()
        }
    }

    #[async_trait]
    impl AccountService for RecordingService {
        async fn create_account(
            &self,
            request: CreateAccountRequest,
        ) -> Result<CreatedAccount, AccountServiceError> {
            let mut calls = self.calls.lock().expect("lock");
            if self.fail_after.is_some_and(|limit| calls.len() >= limit) {
                return Err(AccountServiceError::Rejected {
                    reason: "insufficient payer balance".into(),
                });
            }

            let balance = request.initial_balance;
            calls.push(request);
            Ok(CreatedAccount {
                account_id: format!("0.0.{}", 1000 + calls.len()),
                balance,
            })
        }
    }

    #[tokio::test]
    async fn requests_count_accounts_per_kind() {
        let service = RecordingService::new(None);
        let summary = generate_accounts(&service, 3).await.expect("generation");

        let calls = service.calls();
        assert_eq!(calls.len(), 9, "three kinds, three accounts each");
        for kind in AccountKeyKind::ALL {
            let of_kind = calls
                .iter()
                .filter(|call| call.key_kind == kind.label())
                .count();
            assert_eq!(of_kind, 3, "kind {} under-requested", kind.label());
        }
        assert_eq!(summary.total(), 9);
    }

    #[tokio::test]
    async fn failure_aborts_the_remaining_generation() {
        let service = RecordingService::new(Some(4));
        let err = generate_accounts(&service, 3)
            .await
            .expect_err("the fifth creation fails");

        assert!(matches!(err, AccountServiceError::Rejected { .. }));
        assert_eq!(
            service.calls().len(),
            4,
            "no further requests may be issued after a failure"
        );
    }

    #[tokio::test]
    async fn only_alias_kind_requests_an_alias() {
        let service = RecordingService::new(None);
        generate_accounts(&service, 1).await.expect("generation");

        for call in service.calls() {
            let expect_alias = call.key_kind == AccountKeyKind::EcdsaSecp256k1Alias.label();
            assert_eq!(call.evm_alias, expect_alias);
        }
    }

    #[tokio::test]
    async fn zero_count_still_reports_every_kind() {
        let service = RecordingService::new(None);
        let summary = generate_accounts(&service, 0).await.expect("generation");

        assert!(service.calls().is_empty());
        assert_eq!(summary.created().len(), AccountKeyKind::ALL.len());
        assert_eq!(summary.total(), 0);
    }
}
