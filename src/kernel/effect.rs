use std::path::PathBuf;

/// Store 交给前端执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SpawnTerminal { dir: PathBuf },
}
