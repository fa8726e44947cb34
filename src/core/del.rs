use crate::core::ledger::Ledger;
use crate::db::kv::KvStore;
use crate::errors::AppResult;
use crate::models::record::DailyRecord;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the record matching `id_or_prefix`.
    /// Returns the removed record, or `None` when nothing matched.
    pub fn apply<S: KvStore>(
        ledger: &mut Ledger<S>,
        id_or_prefix: &str,
    ) -> AppResult<Option<DailyRecord>> {
        let Some(target) = ledger.find(id_or_prefix)?.cloned() else {
            return Ok(None);
        };

        if ledger.delete(&target.id)? {
            Ok(Some(target))
        } else {
            Ok(None)
        }
    }
}
