use crate::core::derive::{InputPolicy, RawInput, derive_record, parse_input};
use crate::core::ledger::Ledger;
use crate::db::kv::KvStore;
use crate::errors::AppResult;
use crate::models::record::DailyRecord;
use chrono::{DateTime, Utc};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Parse the typed amounts, derive profit and efficiency, store the record.
    /// Nothing is stored when parsing fails.
    pub fn apply<S: KvStore>(
        ledger: &mut Ledger<S>,
        raw: &RawInput<'_>,
        date: DateTime<Utc>,
        policy: InputPolicy,
    ) -> AppResult<DailyRecord> {
        let input = parse_input(raw, policy)?;
        ledger.add(derive_record(&input, date))
    }
}
