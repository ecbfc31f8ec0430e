//! 字段投影：从查询报告生成确定性的展示内容
//!
//! 元信息摘要与属性表格都按固定顺序生成，与服务端映射的键序无关。

use std::collections::HashMap;

use chem_lookup_client::{PropertyReport, SubstanceMeta};

use crate::state::{PropertyRow, PropertyTable, ResultView};

/// 展示白名单：固定顺序与双语标签（溶解度无英文对照，保留原键）
///
/// 不在白名单内的属性键即使出现在响应中也不展示。
const DISPLAY_WHITELIST: [(&str, &str); 4] = [
    ("熔点", "熔点 / Melting point"),
    ("沸点", "沸点 / Boiling point"),
    ("溶解度", "溶解度"),
    ("储存条件", "储存条件 / Storage conditions"),
];

/// 生成元信息摘要
///
/// 按 中文名称、英文名称、CAS 的固定顺序，将存在的键渲染为
/// `标签：值` 并以 ` / ` 连接；缺失的键不产生任何分隔符残留。
/// 全部缺失时返回空串。
#[must_use]
pub fn meta_summary(meta: &SubstanceMeta) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(name) = &meta.chinese_name {
        parts.push(format!("中文名称：{name}"));
    }
    if let Some(name) = &meta.english_name {
        parts.push(format!("英文名称：{name}"));
    }
    if let Some(cas) = &meta.cas {
        parts.push(format!("CAS：{cas}"));
    }
    parts.join(" / ")
}

/// 按白名单投影属性映射
///
/// 只收录白名单内且在映射中存在的键，顺序恒为白名单顺序；
/// 值不做单位解析、数值转换或截断。零命中时返回占位条目。
#[must_use]
pub fn project_properties(properties: &HashMap<String, String>) -> PropertyTable {
    let rows: Vec<PropertyRow> = DISPLAY_WHITELIST
        .iter()
        .filter_map(|(key, label)| {
            properties.get(*key).map(|value| PropertyRow {
                label: (*label).to_string(),
                value: value.clone(),
            })
        })
        .collect();

    if rows.is_empty() {
        PropertyTable::Placeholder
    } else {
        PropertyTable::Rows(rows)
    }
}

/// 从一份查询报告构建完整展示内容
#[must_use]
pub fn project(report: &PropertyReport) -> ResultView {
    ResultView {
        meta_summary: meta_summary(&report.meta),
        table: project_properties(&report.properties),
        source_url: report.source_url.clone(),
    }
}
