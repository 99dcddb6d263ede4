// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod fixture;
pub mod main;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::fixture::{ChainFixture, FaultRecord, MAX_FIXTURE_PROOFS};
    use super::main::scan_fixture;
    use crate::shim::address::Address;
    use crate::storage_fault::{LookbackStrategy, MonitorConfig};

    const FIXTURE: &str = r#"{
        "proving_period": { "start": 1, "end": 2 },
        "generation_attack_threshold": 100,
        "tipsets": [
            { "height": 0, "blocks": [{ "miner": "f01000", "messages": [{ "from": "f01001", "proofs": 1 }] }] },
            { "height": 1, "blocks": [{ "miner": "f01000" }] },
            { "height": 2, "blocks": [{ "miner": "f01000", "messages": [{ "from": "f01002", "proofs": 1 }] }] },
            { "height": 3, "blocks": [
                { "miner": "f01000", "timestamp": 1, "messages": [
                    { "from": "f01001", "proofs": 2 },
                    { "method": "send", "from": "f01001" }
                ] },
                { "miner": "f01003", "timestamp": 2, "messages": [
                    { "from": "f01002", "params": "" },
                    { "from": "f01002", "proofs": 1 }
                ] }
            ] }
        ]
    }"#;

    fn records(strategy: LookbackStrategy) -> Vec<FaultRecord> {
        let fixture: ChainFixture = serde_json::from_str(FIXTURE).unwrap();
        let report = scan_fixture(
            &fixture,
            Address::new_id(1001),
            MonitorConfig { lookback: strategy },
        )
        .unwrap();
        assert!(report.is_ok());
        report.faults.iter().map(FaultRecord::from).collect()
    }

    #[test]
    fn fixture_scan_with_shared_cursor() {
        let records = records(LookbackStrategy::SharedCursor);
        let summary = records
            .iter()
            .map(|r| (r.code, r.kind.as_str(), r.miner.as_str()))
            .collect::<Vec<_>>();
        // f01001 is found at genesis past the proving period; the cursor is
        // then exhausted for the second submission of f01002
        assert_eq!(
            summary,
            vec![
                (51, "LateSubmission", "f01001"),
                (53, "EmptyProofs", "f01002"),
                (52, "AfterGenerationAttackThreshold", "f01002"),
            ]
        );
        assert_ne!(records[0].block, records[1].block);
        assert_eq!(records[1].block, records[2].block);
    }

    #[test]
    fn fixture_scan_with_cursor_per_message() {
        let records = records(LookbackStrategy::CursorPerMessage);
        let summary = records
            .iter()
            .map(|r| (r.code, r.miner.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(summary, vec![(51, "f01001"), (53, "f01002")]);
    }

    fn fixture_with(tipsets: &str) -> ChainFixture {
        serde_json::from_str(&format!(
            r#"{{ "proving_period": {{ "start": 0, "end": 1 }}, "generation_attack_threshold": 1, "tipsets": {tipsets} }}"#
        ))
        .unwrap()
    }

    #[test]
    fn decreasing_heights_are_rejected() {
        let fixture = fixture_with(
            r#"[{ "height": 5, "blocks": [{ "miner": "f01000" }] }, { "height": 0, "blocks": [{ "miner": "f01000" }] }]"#,
        );
        let err = fixture.build().unwrap_err();
        assert!(format!("{err:#}").contains("follows a higher tipset"));
    }

    #[test]
    fn repeated_heights_are_rejected() {
        let fixture = fixture_with(
            r#"[{ "height": 1, "blocks": [{ "miner": "f01000" }] }, { "height": 1, "blocks": [{ "miner": "f01001" }] }]"#,
        );
        assert!(fixture.build().is_err());
    }

    #[test]
    fn null_rounds_are_allowed() {
        let fixture = fixture_with(
            r#"[{ "height": 0, "blocks": [{ "miner": "f01000" }] }, { "height": 4, "blocks": [{ "miner": "f01000" }] }]"#,
        );
        let (db, head) = fixture.build().unwrap();
        assert_eq!(head.height().value(), 4);
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn proof_count_is_capped() {
        let with_proofs = |proofs: usize| {
            fixture_with(&format!(
                r#"[{{ "height": 0, "blocks": [{{ "miner": "f01000", "messages": [{{ "from": "f01001", "proofs": {proofs} }}] }}] }}]"#
            ))
        };

        let (_, head) = with_proofs(MAX_FIXTURE_PROOFS).build().unwrap();
        let msg = &head.blocks()[0].messages()[0];
        assert_eq!(msg.proof_count(), MAX_FIXTURE_PROOFS);

        let err = with_proofs(MAX_FIXTURE_PROOFS + 1).build().unwrap_err();
        assert!(format!("{err:#}").contains("at most"));
    }

    #[test]
    fn empty_fixture_is_rejected() {
        let fixture: ChainFixture = serde_json::from_str(
            r#"{ "proving_period": { "start": 0, "end": 1 }, "generation_attack_threshold": 1, "tipsets": [] }"#,
        )
        .unwrap();
        assert!(fixture.build().is_err());
    }
}
