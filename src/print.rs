use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::fee::Evaluation;
use crate::report::verdict;

/// Tabulates a sweep of evaluations, marking the row for `selected` sessions per week.
pub fn tabulate_sweep(evaluations: &[Evaluation], selected: u32) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(2)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(17)).with(HAlign::Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "".into(),
                "Sessions".into(),
                "Per minute".into(),
                "Per hour".into(),
                "Max fee".into(),
                "Result".into(),
            ],
        ));
    table.push_rows(evaluations.iter().map(|evaluation| {
        let marker = if evaluation.sessions_per_week == selected { "*" } else { "" };
        Row::new(
            Styles::default(),
            vec![
                marker.into(),
                format!("{}", evaluation.sessions_per_week).into(),
                format!("{:.2}", evaluation.per_minute_price).into(),
                format!("{:.0}", evaluation.per_hour_price).into(),
                format!("{:.0}", evaluation.max_allowed_fee).into(),
                verdict(evaluation.compliant).into(),
            ],
        )
    }));
    table
}
