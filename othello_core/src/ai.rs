/// ネガマックス（αβ枝刈り付き）探索AI。
pub mod negamax;
/// 合法手からランダムに1手選ぶAI。
pub mod random;
pub mod types;

pub type Move = types::Move;
