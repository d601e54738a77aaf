//! 辅导组注册表访问
//!
//! `TutorialTagSource` 是匹配器依赖的只读能力：`Model` 直接实现，
//! `RegistryAccessor` 则通过一次性绑定的共享 `Model` 实现。

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::error::{Error, Result};
use crate::model::tag::TutorialTag;
use crate::model::Model;

/// 共享的应用状态
pub type SharedModel = Arc<RwLock<Model>>;

/// 当前有效辅导组的只读来源（有序）
pub trait TutorialTagSource {
    /// 在当前辅导组列表上执行 `f`
    fn with_tutorial_tags<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&[TutorialTag]) -> R;
}

impl TutorialTagSource for [TutorialTag] {
    fn with_tutorial_tags<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&[TutorialTag]) -> R,
    {
        Ok(f(self))
    }
}

impl TutorialTagSource for Vec<TutorialTag> {
    fn with_tutorial_tags<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&[TutorialTag]) -> R,
    {
        Ok(f(self.as_slice()))
    }
}

// ============================================================================
// 一次性绑定的访问器
// ============================================================================

/// 注册表访问器
///
/// 首次 `bind` 生效，之后的绑定静默忽略；未绑定时读取返回 IllegalState。
/// 读取时持有共享 `Model` 的读锁，持有写锁的线程不得再通过访问器读取。
#[derive(Debug, Default)]
pub struct RegistryAccessor {
    model: OnceLock<SharedModel>,
}

impl RegistryAccessor {
    pub const fn new() -> Self {
        Self {
            model: OnceLock::new(),
        }
    }

    /// 绑定共享状态，返回本次调用是否完成了绑定
    pub fn bind(&self, model: SharedModel) -> bool {
        let mut bound = false;
        self.model.get_or_init(|| {
            bound = true;
            model
        });

        if bound {
            tracing::info!("辅导组注册表已绑定");
        } else {
            tracing::debug!("辅导组注册表已绑定过，忽略重复绑定");
        }
        bound
    }

    pub fn is_bound(&self) -> bool {
        self.model.get().is_some()
    }

    /// 当前辅导组列表的快照
    pub fn current_tutorial_tags(&self) -> Result<Vec<TutorialTag>> {
        self.with_tutorial_tags(|tags| tags.to_vec())
    }
}

impl TutorialTagSource for RegistryAccessor {
    fn with_tutorial_tags<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&[TutorialTag]) -> R,
    {
        let model = self.model.get().ok_or_else(|| {
            Error::IllegalState("Tag registry has not been initialized".to_string())
        })?;

        let guard = model.read().unwrap_or_else(PoisonError::into_inner);
        Ok(f(guard.tutorial_tags()))
    }
}

static GLOBAL_REGISTRY: RegistryAccessor = RegistryAccessor::new();

/// 进程级注册表访问器
pub fn global_registry() -> &'static RegistryAccessor {
    &GLOBAL_REGISTRY
}
