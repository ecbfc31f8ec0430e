//! 渲染能力接缝
//!
//! 交互核心不直接触碰任何展示表面，只通过 [`Renderer`] 反映状态。
//! 平台层（DOM、终端等）注入自己的实现；[`TextRenderer`] 是内置的
//! 纯文本适配器，也充当测试用的参考实现。

use std::io::Write;

use crate::messages;
use crate::state::{PropertyTable, ResultView};

/// 展示表面能力
///
/// 每个方法都意味着 “隐藏其余所有展示，只显示本状态”，
/// 实现方不需要自己维护互斥。
pub trait Renderer {
    /// 显示加载指示
    fn show_loading(&mut self);

    /// 显示错误横幅
    fn show_error(&mut self, message: &str);

    /// 显示结果面板（摘要 + 两列表格 + 来源行）
    fn show_result(&mut self, view: &ResultView);
}

/// 写入任意文本输出的两列表格渲染器
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// 包装一个输出目标
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// 取回输出目标（测试用）
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn show_loading(&mut self) {
        let _ = writeln!(self.out, "查询中…");
    }

    fn show_error(&mut self, message: &str) {
        let _ = writeln!(self.out, "错误：{message}");
    }

    fn show_result(&mut self, view: &ResultView) {
        if !view.meta_summary.is_empty() {
            let _ = writeln!(self.out, "{}", view.meta_summary);
        }
        match &view.table {
            PropertyTable::Rows(rows) => {
                for row in rows {
                    let _ = writeln!(self.out, "| {} | {} |", row.label, row.value);
                }
            }
            // 占位条目横跨两列，不输出列分隔
            PropertyTable::Placeholder => {
                let _ = writeln!(self.out, "| {} |", messages::NO_COMMON_PROPERTIES);
            }
        }
        // 来源链接缺失时仍输出来源行，链接目标为空
        let url = view.source_url.as_deref().unwrap_or("");
        let _ = writeln!(
            self.out,
            "{}{} <{url}>",
            messages::SOURCE_PREFIX,
            messages::SOURCE_LINK_TEXT
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PropertyRow;

    fn render(view: &ResultView) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.show_result(view);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn result_with_rows() {
        let view = ResultView {
            meta_summary: "中文名称：甲醇 / CAS：67-56-1".into(),
            table: PropertyTable::Rows(vec![PropertyRow {
                label: "熔点 / Melting point".into(),
                value: "-97.8 °C".into(),
            }]),
            source_url: Some("https://example.com".into()),
        };
        let text = render(&view);
        assert!(text.contains("中文名称：甲醇 / CAS：67-56-1"));
        assert!(text.contains("| 熔点 / Melting point | -97.8 °C |"));
        assert!(text.contains("来源：ChemicalBook 页面 <https://example.com>"));
    }

    #[test]
    fn placeholder_spans_both_columns() {
        let view = ResultView {
            meta_summary: String::new(),
            table: PropertyTable::Placeholder,
            source_url: None,
        };
        let text = render(&view);
        // 单条占位，无列分隔
        assert!(text.contains(&format!("| {} |", messages::NO_COMMON_PROPERTIES)));
        assert!(!text.contains(&format!("| {} | ", messages::NO_COMMON_PROPERTIES)));
    }

    #[test]
    fn empty_meta_summary_line_suppressed() {
        let view = ResultView {
            meta_summary: String::new(),
            table: PropertyTable::Placeholder,
            source_url: None,
        };
        let text = render(&view);
        assert!(!text.starts_with('\n'));
    }

    #[test]
    fn absent_source_url_renders_inert_link() {
        let view = ResultView {
            meta_summary: String::new(),
            table: PropertyTable::Placeholder,
            source_url: None,
        };
        let text = render(&view);
        assert!(text.contains("来源：ChemicalBook 页面 <>"));
    }

    #[test]
    fn loading_and_error_lines() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.show_loading();
        renderer.show_error("查询失败");
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("查询中…"));
        assert!(text.contains("错误：查询失败"));
    }
}
