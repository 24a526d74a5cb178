//! Built-in FileMaker vocabulary.
//!
//! Function names are matched case-sensitively and only in call position
//! (`Name (`), except for the few that take no arguments. Constants are the
//! `Get()` parameter names, text style names and JSON type names, matched
//! case-insensitively.

/// Functions written with an argument list.
pub(crate) const FUNCTIONS: &[&str] = &[
    // Text
    "Char", "Code", "Exact", "Filter", "FilterValues", "GetAsCSS", "GetAsDate",
    "GetAsNumber", "GetAsSVG", "GetAsText", "GetAsTime", "GetAsTimestamp",
    "GetAsURLEncoded", "GetValue", "Hiragana", "KanaHankaku", "KanaZenkaku",
    "KanjiNumeral", "Katakana", "Left", "LeftValues", "LeftWords", "Length",
    "Lower", "Middle", "MiddleValues", "MiddleWords", "NumToJText",
    "PatternCount", "Position", "Proper", "Quote", "Replace", "Right",
    "RightValues", "RightWords", "RomanHankaku", "RomanZenkaku",
    "SerialIncrement", "SortValues", "Substitute", "Trim", "TrimAll",
    "UniqueValues", "Upper", "ValueCount", "WordCount",
    // Text formatting
    "RGB", "TextColor", "TextColorRemove", "TextFont", "TextFontRemove",
    "TextFormatRemove", "TextSize", "TextSizeRemove", "TextStyleAdd",
    "TextStyleRemove",
    // Number
    "Abs", "Ceiling", "Combination", "Div", "Exp", "Factorial", "Floor", "Int",
    "Lg", "Ln", "Log", "Mod", "Round", "SetPrecision", "Sign", "Sqrt",
    "Truncate",
    // Date
    "Date", "Day", "DayName", "DayNameJ", "DayOfWeek", "DayOfYear", "Month",
    "MonthName", "MonthNameJ", "WeekOfYear", "WeekOfYearFiscal", "Year",
    "YearName",
    // Time & timestamp
    "Hour", "Minute", "Seconds", "Time", "Timestamp",
    // Aggregate & summary
    "Average", "Count", "List", "Max", "Min", "StDev", "StDevP", "Sum",
    "Variance", "VarianceP", "GetSummary",
    // Repeating
    "Extend", "GetRepetition", "Last",
    // Financial
    "FV", "NPV", "PMT", "PV",
    // Trigonometric
    "Acos", "Asin", "Atan", "Cos", "Degrees", "Radians", "Sin", "Tan",
    // Logical
    "Case", "Choose", "Evaluate", "EvaluationError", "ExecuteSQL", "GetField",
    "GetFieldName", "GetLayoutObjectAttribute", "GetNthRecord", "If",
    "IsEmpty", "IsValid", "IsValidExpression", "Let", "Lookup", "LookupNext",
    "SetRecursion", "While",
    // Get & design
    "Get", "DatabaseNames", "FieldBounds", "FieldComment", "FieldIDs",
    "FieldNames", "FieldRepetitions", "FieldStyle", "FieldType",
    "GetNextSerialValue", "LayoutIDs", "LayoutNames", "LayoutObjectNames",
    "RelationInfo", "ScriptIDs", "ScriptNames", "TableIDs", "TableNames",
    "ValueListIDs", "ValueListItems", "ValueListNames", "WindowNames",
    // Container
    "Base64Decode", "Base64Encode", "Base64EncodeRFC", "CryptAuthCode",
    "CryptDecrypt", "CryptDecryptBase64", "CryptDigest", "CryptEncrypt",
    "CryptEncryptBase64", "CryptGenerateSignature", "CryptVerifySignature",
    "GetContainerAttribute", "GetHeight", "GetThumbnail", "GetWidth",
    "HexDecode", "HexEncode", "TextDecode", "TextEncode", "VerifyContainer",
    // JSON
    "JSONDeleteElement", "JSONFormatElements", "JSONGetElement",
    "JSONGetElementType", "JSONListKeys", "JSONListValues", "JSONMakeArray",
    "JSONSetElement",
    // Mobile
    "GetSensor", "Location", "LocationValues",
];

/// Functions that take no arguments and are written without parentheses.
pub(crate) const NULLARY_FUNCTIONS: &[&str] = &["Pi", "Random"];

/// System constants: `Get()` parameters, text styles, JSON types.
pub(crate) const CONSTANTS: &[&str] = &[
    // Get() parameters
    "AccountExtendedPrivileges", "AccountName", "AccountPrivilegeSetName",
    "ActiveFieldContents", "ActiveFieldName", "ActiveFieldTableName",
    "ActiveLayoutObjectName", "ActiveModifierKeys", "ActiveRepetitionNumber",
    "ActiveSelectionSize", "ActiveSelectionStart", "AllowAbortState",
    "AllowFormattingBarState", "ApplicationLanguage", "ApplicationVersion",
    "CalculationRepetitionNumber", "ConnectionState", "CurrentDate",
    "CurrentHostTimestamp", "CurrentTime", "CurrentTimestamp",
    "CurrentTimeUTCMilliseconds", "CustomMenuSetName", "DesktopPath",
    "DocumentsPath", "DocumentsPathListing", "ErrorCaptureState",
    "FileMakerPath", "FileName", "FilePath", "FileSize", "FoundCount",
    "HighContrastColor", "HighContrastState", "HostApplicationVersion",
    "HostIPAddress", "HostName", "LastError", "LastMessageChoice",
    "LastODBCError", "LayoutAccess", "LayoutCount", "LayoutName",
    "LayoutNumber", "LayoutTableName", "LayoutViewState", "ModifiedFields",
    "MultiUserState", "NetworkProtocol", "PageNumber", "PersistentID",
    "PreferencesPath", "PrinterName", "QuickFindText", "RecordAccess",
    "RecordID", "RecordModificationCount", "RecordNumber", "RecordOpenCount",
    "RecordOpenState", "RequestCount", "RequestOmitState", "ScreenDepth",
    "ScreenHeight", "ScreenWidth", "ScriptName", "ScriptParameter",
    "ScriptResult", "SortState", "StatusAreaState", "SystemDrive",
    "SystemIPAddress", "SystemLanguage", "SystemNICAddress", "SystemPlatform",
    "SystemVersion", "TemporaryPath", "TextRulerVisible", "TotalRecordCount",
    "TriggerKeystroke", "TriggerModifierKeys", "UserCount", "UserName", "UUID",
    "WindowContentHeight", "WindowContentWidth", "WindowDesktopHeight",
    "WindowDesktopWidth", "WindowHeight", "WindowLeft", "WindowMode",
    "WindowName", "WindowTop", "WindowVisible", "WindowWidth",
    "WindowZoomLevel",
    // Text styles
    "AllStyles", "Bold", "Condense", "DoubleUnderline", "Extend",
    "HighlightYellow", "Italic", "Lowercase", "Plain", "SmallCaps",
    "Strikethrough", "Subscript", "Superscript", "Titlecase", "Underline",
    "Uppercase", "WordUnderline",
    // JSON types
    "JSONArray", "JSONBoolean", "JSONNull", "JSONNumber", "JSONObject",
    "JSONRaw", "JSONString",
];

/// Regex alternation matching exactly one of `words`.
///
/// Longer words come first so that a word which is a prefix of another
/// never shadows it when the alternation is not followed by a boundary.
pub(crate) fn alternation(words: &[&str]) -> String {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sorted.dedup();
    sorted
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests;
