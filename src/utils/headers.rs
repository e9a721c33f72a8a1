use http::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// 将响应中的字符串头部映射转换为 `HeaderMap`
///
/// 名称或值不合法的头部会被跳过。
///
/// # 参数
///
/// * `source` - 源头部映射
///
/// # 返回值
///
/// 包含所有合法头部的新头部映射
pub fn to_header_map(source: &HashMap<String, String>) -> HeaderMap {
    let mut result = HeaderMap::new();

    for (name, value) in source {
        let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) else {
            tracing::warn!(header = %name, "跳过不合法的响应头部");
            continue;
        };
        result.insert(name, value);
    }

    result
}
