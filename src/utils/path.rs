/// 默认的路由前缀（API Gateway 上的 presign/objects 资源）
pub const DEFAULT_ROUTE_PREFIX: &str = "presign/objects";

/// 路由前缀
///
/// 请求路径开头的若干段属于 API 路由，不属于对象键。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePrefix {
    segments: Vec<String>,
}

impl RoutePrefix {
    /// 从形如 `presign/objects` 的字符串解析路由前缀，忽略多余的斜杠。
    ///
    /// # 示例
    ///
    /// ```
    /// use presign_router::utils::path::RoutePrefix;
    ///
    /// assert_eq!(RoutePrefix::parse("presign/objects").depth(), 2);
    /// assert_eq!(RoutePrefix::parse("/presign/").depth(), 1);
    /// assert_eq!(RoutePrefix::parse("").depth(), 0);
    /// ```
    pub fn parse(prefix: &str) -> Self {
        let segments = prefix
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Self { segments }
    }

    /// 前缀包含的段数
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl Default for RoutePrefix {
    fn default() -> Self {
        Self::parse(DEFAULT_ROUTE_PREFIX)
    }
}

/// 从请求路径中提取对象键
///
/// 按 `/` 切分路径，丢弃开头的空段以及 `prefix_depth` 个路由段，剩余部分用 `/` 重新连接。
/// 只按位置丢弃，不校验路由段的内容。剩余部分为空时返回空字符串。
///
/// # 参数
///
/// * `path` - 请求路径，例如 `/presign/objects/a/b/c`
/// * `prefix_depth` - 路由前缀的段数
///
/// # 返回值
///
/// 对象键，保留其中的斜杠
///
/// # 示例
///
/// ```
/// use presign_router::utils::path::derive_key;
///
/// assert_eq!(derive_key("/presign/objects/test-file", 2), "test-file");
/// assert_eq!(derive_key("/presign/objects/a/b/c", 2), "a/b/c");
/// assert_eq!(derive_key("/presign/objects/test-file", 1), "objects/test-file");
/// assert_eq!(derive_key("/presign/objects", 2), "");
/// ```
pub fn derive_key(path: &str, prefix_depth: usize) -> String {
    path.split('/')
        .skip(1 + prefix_depth)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key() {
        // 基本用法
        assert_eq!(derive_key("/presign/objects/test-file", 2), "test-file");

        // 键中的斜杠保留
        assert_eq!(derive_key("/presign/objects/a/b/c", 2), "a/b/c");

        // 尾部斜杠保留
        assert_eq!(derive_key("/presign/objects/dir/", 2), "dir/");

        // 路由段内容不参与校验
        assert_eq!(derive_key("/other/route/test-file", 2), "test-file");

        // 只有前缀
        assert_eq!(derive_key("/presign/objects", 2), "");
        assert_eq!(derive_key("/presign/objects/", 2), "");

        // 比前缀还短
        assert_eq!(derive_key("/presign", 2), "");
        assert_eq!(derive_key("", 2), "");

        // 单段前缀等价于丢弃前两段
        assert_eq!(derive_key("/presign/objects/test-file", 1), "objects/test-file");

        // 没有前缀
        assert_eq!(derive_key("/a/b", 0), "a/b");
    }

    #[test]
    fn test_route_prefix_parse() {
        let prefix = RoutePrefix::parse("//presign//objects/");
        assert_eq!(prefix.depth(), 2);
        assert_eq!(prefix, RoutePrefix::parse("presign/objects"));

        assert_eq!(RoutePrefix::default(), RoutePrefix::parse("presign/objects"));
        assert_eq!(RoutePrefix::parse("/").depth(), 0);
    }
}
