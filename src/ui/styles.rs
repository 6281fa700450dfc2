pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; gap: 8px; padding: 12px; box-sizing: border-box; overflow: hidden; font-family: sans-serif;"
}

pub fn toolbar_style() -> &'static str {
    "display: flex; gap: 8px; align-items: center;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto;"
}

pub fn table_style() -> &'static str {
    "border-collapse: collapse; width: 100%; background: #fff;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f3f3f3; border: 1px solid #bbb; padding: 6px; text-align: left;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px;"
}

pub fn checkbox_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px; text-align: center; width: 32px;"
}

pub fn row_style(selected: bool) -> &'static str {
    if selected {
        "background: #eef4ff;"
    } else {
        ""
    }
}

pub fn pagination_style() -> &'static str {
    "display: flex; gap: 8px; align-items: center; justify-content: center;"
}

pub fn delete_button_style() -> &'static str {
    "color: #fff; background: #d24; border: 1px solid #b12; padding: 2px 8px;"
}
