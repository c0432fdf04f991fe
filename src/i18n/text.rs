use crate::i18n::Language;

/// UI strings for one language.
pub struct Text {
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub add_button: &'static str,
    pub adding: &'static str,
    pub last_watered: &'static str,
    pub never: &'static str,
    pub water_key_hint: &'static str,
    pub remove_key_hint: &'static str,
    pub language_key_hint: &'static str,
    pub quit_key_hint: &'static str,
    pub never_watered: &'static str,
    pub no_schedule: &'static str,
    pub needs_watering: &'static str,
    days_until_watering: &'static str,
    pub fallback_description: &'static str,
    pub no_plants: &'static str,
}

impl Text {
    /// Days-remaining label with the `{days}` placeholder substituted.
    pub fn days_until_watering(&self, days: i64) -> String {
        self.days_until_watering
            .replace("{days}", &days.to_string())
    }
}

const EN: Text = Text {
    title: "🌱 Plant Watering Tracker",
    search_placeholder: "Search for a plant...",
    add_button: "Add",
    adding: "Adding...",
    last_watered: "Last watered:",
    never: "Never",
    water_key_hint: "w water",
    remove_key_hint: "r remove",
    language_key_hint: "ctrl-l 中文",
    quit_key_hint: "ctrl-c quit",
    never_watered: "Never watered",
    no_schedule: "No watering schedule",
    needs_watering: "Needs watering now!",
    days_until_watering: "Days until next watering: {days}",
    fallback_description: "Water when the top inch of soil feels dry to the touch.",
    no_plants: "No plants yet. Type a name and press Enter to add one.",
};

const ZH: Text = Text {
    title: "🌱 植物浇水追踪器",
    search_placeholder: "搜索植物...",
    add_button: "添加",
    adding: "添加中...",
    last_watered: "上次浇水:",
    never: "从未",
    water_key_hint: "w 浇水",
    remove_key_hint: "r 删除",
    language_key_hint: "ctrl-l English",
    quit_key_hint: "ctrl-c 退出",
    never_watered: "从未浇水",
    no_schedule: "无浇水计划",
    needs_watering: "现在需要浇水！",
    days_until_watering: "距离下次浇水还有: {days}天",
    fallback_description: "当表层土壤摸起来干燥时浇水。",
    no_plants: "还没有植物。输入名称并按回车添加。",
};

pub fn text(language: Language) -> &'static Text {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_placeholder_is_substituted() {
        assert_eq!(
            text(Language::En).days_until_watering(2),
            "Days until next watering: 2"
        );
        assert_eq!(
            text(Language::Zh).days_until_watering(2),
            "距离下次浇水还有: 2天"
        );
    }
}
