// Model 模块 - 应用状态
//
// 架构：
// - tag: 标签、辅导组标签、状态/类型映射
// - person: 联系人
// - filter: 联系人过滤条件
// - registry: 辅导组注册表访问能力

pub mod filter;
pub mod person;
pub mod registry;
pub mod tag;

use crate::error::{Error, Result};
use crate::matcher::Matcher;

use filter::PersonFilter;
use person::Person;
use tag::{Tag, TagNameRule, TutorialTag, MESSAGE_CONSTRAINTS};

/// 辅导组列表为空时的展示文本
pub const NO_TUTORIAL_GROUPS: &str = "No tutorial groups";

/// 应用状态：联系人、辅导组注册表与当前过滤条件
///
/// 所有进入模型的标签名都须满足 `tag_name_rule`，与加载持久化数据时的规则一致。
#[derive(Debug, Clone)]
pub struct Model {
    persons: Vec<Person>,
    tutorial_tags: Vec<TutorialTag>,
    filters: Vec<PersonFilter>,
    tag_name_rule: TagNameRule,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    pub fn new() -> Self {
        Self::with_tag_name_rule(TagNameRule::default())
    }

    pub fn with_tag_name_rule(tag_name_rule: TagNameRule) -> Self {
        Self {
            persons: Vec::new(),
            tutorial_tags: Vec::new(),
            filters: vec![PersonFilter::ShowAll],
            tag_name_rule,
        }
    }

    pub fn tag_name_rule(&self) -> TagNameRule {
        self.tag_name_rule
    }

    fn check_tag_name(&self, tag: &Tag) -> Result<()> {
        if self.tag_name_rule.is_valid(tag.name()) {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "{}: {}",
                MESSAGE_CONSTRAINTS,
                tag.name()
            )))
        }
    }

    fn check_person_tags(&self, person: &Person) -> Result<()> {
        person.tags().iter().try_for_each(|tag| self.check_tag_name(tag))
    }

    // ========================================================================
    // 整体替换
    // ========================================================================

    /// 整体替换联系人与辅导组注册表（如加载存储后），保留当前过滤条件
    ///
    /// 任一联系人/辅导组重复或标签名不合法时返回错误，模型保持不变
    pub fn set_data(
        &mut self,
        persons: Vec<Person>,
        tutorial_tags: Vec<TutorialTag>,
    ) -> Result<()> {
        for (i, person) in persons.iter().enumerate() {
            self.check_person_tags(person)?;
            if persons[..i].iter().any(|p| p.is_same_person(person)) {
                return Err(Error::DuplicatePerson(person.name().to_string()));
            }
        }
        for (i, tutorial_tag) in tutorial_tags.iter().enumerate() {
            self.check_tag_name(tutorial_tag.as_tag())?;
            if tutorial_tags[..i].contains(tutorial_tag) {
                return Err(Error::DuplicateTutorialTag(tutorial_tag.name().to_string()));
            }
        }

        tracing::info!(
            "替换模型数据: {} 个联系人, {} 个辅导组",
            persons.len(),
            tutorial_tags.len()
        );
        self.persons = persons;
        self.tutorial_tags = tutorial_tags;
        Ok(())
    }

    // ========================================================================
    // 联系人
    // ========================================================================

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> Result<()> {
        self.check_person_tags(&person)?;
        if self.has_person(&person) {
            return Err(Error::DuplicatePerson(person.name().to_string()));
        }
        tracing::info!("添加联系人: {}", person.name());
        self.persons.push(person);
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p.is_same_person(target))
            .ok_or_else(|| Error::PersonNotFound(target.name().to_string()))?;
        tracing::info!("删除联系人: {}", target.name());
        self.persons.remove(index);
        Ok(())
    }

    /// 用 `edited` 替换 `target`，改名后不能与其他联系人重名
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p.is_same_person(target))
            .ok_or_else(|| Error::PersonNotFound(target.name().to_string()))?;

        self.check_person_tags(&edited)?;
        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(Error::DuplicatePerson(edited.name().to_string()));
        }

        tracing::info!("更新联系人: {} -> {}", target.name(), edited.name());
        self.persons[index] = edited;
        Ok(())
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    // ========================================================================
    // 过滤
    // ========================================================================

    /// 当前过滤条件下可见的联系人
    ///
    /// 过滤条件在安装时已校验，求值出错时原样返回错误
    pub fn filtered_persons(&self) -> Result<Vec<&Person>> {
        let matcher = Matcher::new(self);
        let mut visible = Vec::new();
        for person in &self.persons {
            let mut accepted = true;
            for filter in &self.filters {
                if !filter.test(person, &matcher)? {
                    accepted = false;
                    break;
                }
            }
            if accepted {
                visible.push(person);
            }
        }
        Ok(visible)
    }

    /// 以单个条件替换当前过滤条件
    pub fn update_filtered_person_list(&mut self, filter: PersonFilter) -> Result<()> {
        self.persistent_update_filtered_list(vec![filter])
    }

    /// 以多个条件替换当前过滤条件（需全部满足）
    pub fn persistent_update_filtered_list(&mut self, filters: Vec<PersonFilter>) -> Result<()> {
        for filter in &filters {
            filter.validate()?;
        }
        tracing::debug!("更新过滤条件: {:?}", filters);
        self.filters = filters;
        Ok(())
    }

    pub fn filters(&self) -> &[PersonFilter] {
        &self.filters
    }

    // ========================================================================
    // 辅导组注册表
    // ========================================================================

    pub fn has_tutorial_tag(&self, tutorial_tag: &TutorialTag) -> bool {
        self.tutorial_tags.contains(tutorial_tag)
    }

    pub fn add_tutorial_tag(&mut self, tutorial_tag: TutorialTag) -> Result<()> {
        self.check_tag_name(tutorial_tag.as_tag())?;
        if self.has_tutorial_tag(&tutorial_tag) {
            return Err(Error::DuplicateTutorialTag(tutorial_tag.name().to_string()));
        }
        tracing::info!("添加辅导组: {}", tutorial_tag.name());
        self.tutorial_tags.push(tutorial_tag);
        Ok(())
    }

    pub fn delete_tutorial_tag(&mut self, target: &TutorialTag) -> Result<()> {
        let index = self
            .tutorial_tags
            .iter()
            .position(|t| t == target)
            .ok_or_else(|| Error::TutorialTagNotFound(target.name().to_string()))?;
        tracing::info!("删除辅导组: {}", target.name());
        self.tutorial_tags.remove(index);
        Ok(())
    }

    pub fn tutorial_tags(&self) -> &[TutorialTag] {
        &self.tutorial_tags
    }

    pub fn tutorial_tag_list_string(&self) -> String {
        if self.tutorial_tags.is_empty() {
            return NO_TUTORIAL_GROUPS.to_string();
        }
        self.tutorial_tags
            .iter()
            .map(TutorialTag::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl registry::TutorialTagSource for Model {
    fn with_tutorial_tags<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&[TutorialTag]) -> R,
    {
        Ok(f(self.tutorial_tags.as_slice()))
    }
}
