use escrow_shared::{EscrowError as Error, SubAccount};
use soroban_sdk::{token, Env};

/// Adapter over the SEP-41 token contracts that hold every balance.
///
/// User sub-accounts are implicit on the token contract: a `SubAccount` value
/// is all that "creating" one takes. Debits from the engine's own custody are
/// only issued by `vault`, which owns the capability for them.
pub(crate) struct AssetLedger<'a> {
    env: &'a Env,
}

impl<'a> AssetLedger<'a> {
    pub(crate) fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub(crate) fn balance(&self, account: &SubAccount) -> i128 {
        token::Client::new(self.env, &account.asset).balance(&account.holder)
    }

    /// Moves `amount` between two sub-accounts of the same asset.
    /// The source holder must have authorized the current invocation.
    pub(crate) fn transfer(
        &self,
        from: &SubAccount,
        to: &SubAccount,
        amount: i128,
    ) -> Result<(), Error> {
        if from.asset != to.asset {
            return Err(Error::AssetMismatch);
        }
        if amount <= 0 {
            return Ok(());
        }
        let token_client = token::Client::new(self.env, &from.asset);
        token_client.transfer(&from.holder, &to.holder, &amount);
        Ok(())
    }
}
