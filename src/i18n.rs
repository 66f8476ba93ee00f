//! Static UI string tables. Lookup falls back to English, then to the
//! raw key, so partially translated languages stay usable.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    ZhHans,
    ZhHant,
    Ko,
    Ja,
    De,
    Fr,
}

impl Lang {
    pub const ALL: [Lang; 7] = [
        Lang::En,
        Lang::ZhHans,
        Lang::ZhHant,
        Lang::Ko,
        Lang::Ja,
        Lang::De,
        Lang::Fr,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::ZhHans => "zh-Hans",
            Lang::ZhHant => "zh-Hant",
            Lang::Ko => "ko",
            Lang::Ja => "ja",
            Lang::De => "de",
            Lang::Fr => "fr",
        }
    }

    pub fn is_chinese(self) -> bool {
        matches!(self, Lang::ZhHans | Lang::ZhHant)
    }
}

/// Map a host locale tag onto a supported language by prefix. Traditional
/// Chinese regions take priority over the generic zh match.
pub fn detect(tag: &str) -> Lang {
    if tag.starts_with("zh-TW") || tag.starts_with("zh-HK") || tag.starts_with("zh_TW") || tag.starts_with("zh_HK") {
        Lang::ZhHant
    } else if tag.starts_with("zh") {
        Lang::ZhHans
    } else if tag.starts_with("ko") {
        Lang::Ko
    } else if tag.starts_with("ja") {
        Lang::Ja
    } else if tag.starts_with("de") {
        Lang::De
    } else if tag.starts_with("fr") {
        Lang::Fr
    } else {
        Lang::En
    }
}

/// Translate `key` for `lang`, falling back to English and then the key.
pub fn tr<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup(table(lang), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn table(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::ZhHans => ZH_HANS,
        Lang::ZhHant => ZH_HANT,
        Lang::Ko => KO,
        Lang::Ja => JA,
        Lang::De => DE,
        Lang::Fr => FR,
    }
}

const EN: &[(&str, &str)] = &[
    ("title", "Claude Code Easy Suite"),
    ("about", "About"),
    ("manual", "Manual"),
    ("recoverCC", "Recover CC"),
    ("projectDir", "Project Directory"),
    ("change", "Change"),
    ("yoloMode", "Yolo Mode"),
    ("dangerouslySkip", "(Dangerously Skip Permissions)"),
    ("launchBtn", "Launch Claude Code"),
    ("activeModel", "ACTIVE MODEL"),
    ("modelSettings", "MODEL SETTINGS"),
    ("modelName", "Model Name"),
    ("apiKey", "API Key"),
    ("getKey", "Get API Key"),
    ("enterKey", "Enter API Key"),
    ("apiEndpoint", "API Endpoint"),
    ("saveChanges", "Save & Close"),
    ("saving", "Saving..."),
    ("saved", "Saved successfully!"),
    ("recovering", "Recovering..."),
    ("recoverSuccess", "Recovery successful!"),
    (
        "recoverSuccessAlert",
        "Claude Code has been reset. Please DO NOT launch it from here. Instead, open your terminal manually and run 'claude' to complete the native setup.",
    ),
    ("recoverTitle", "Recover Claude Code"),
    (
        "recoverWarning",
        "Warning: This will permanently delete your Claude Code configurations and authentication tokens. This action cannot be undone.",
    ),
    ("startRecover", "Start Recovery"),
    ("close", "Close"),
    ("manageProjects", "Manage Projects"),
    ("projectManagement", "Project Management"),
    ("projectName", "Project Name"),
    ("delete", "Delete"),
    ("addNewProject", "Add New Project"),
    ("projectDirError", "Please set a valid Project Directory!"),
    ("initializing", "Initializing..."),
    ("loadingConfig", "Loading config..."),
    ("syncing", "Syncing to Claude Code..."),
    ("switched", "Model switched & synced!"),
    ("langName", "English"),
    ("custom", "Custom"),
    ("checkUpdate", "Check Update"),
    ("checkingUpdate", "Checking for updates..."),
    ("noUpdate", "No updates available"),
    ("updateAvailable", "Update available: "),
    ("downloadNow", "Download Now"),
    ("paste", "Paste"),
    ("bugReport", "Bug Report or Suggestion"),
    ("quit", "Quit"),
];

const ZH_HANS: &[(&str, &str)] = &[
    ("title", "Claude Code Easy Suite"),
    ("about", "关于"),
    ("manual", "使用说明"),
    ("recoverCC", "恢复CC"),
    ("projectDir", "项目目录"),
    ("change", "更改"),
    ("yoloMode", "Yolo 模式"),
    ("dangerouslySkip", "(危险：跳过权限检查)"),
    ("launchBtn", "启动 Claude Code"),
    ("activeModel", "模型选择"),
    ("modelSettings", "模型设置"),
    ("modelName", "模型名称"),
    ("apiKey", "API 密钥"),
    ("getKey", "获取API密钥"),
    ("enterKey", "输入 API Key"),
    ("apiEndpoint", "API 端点"),
    ("saveChanges", "保存并关闭"),
    ("saving", "保存中..."),
    ("saved", "保存成功！"),
    ("recovering", "正在恢复..."),
    ("recoverSuccess", "恢复成功！"),
    (
        "recoverSuccessAlert",
        "Claude Code 已重置。请注意：不要从本程序启动。请自行手动打开终端窗口并运行 'claude' 命令以恢复原厂设置。",
    ),
    ("recoverTitle", "恢复 Claude Code"),
    (
        "recoverWarning",
        "警告：这将永久删除您的 Claude Code 配置和认证令牌。此操作无法撤销。",
    ),
    ("startRecover", "开始恢复"),
    ("close", "关闭"),
    ("manageProjects", "项目管理"),
    ("projectManagement", "项目管理"),
    ("projectName", "项目名称"),
    ("delete", "删除"),
    ("addNewProject", "添加新项目"),
    ("projectDirError", "请设置有效的项目目录！"),
    ("initializing", "初始化中..."),
    ("loadingConfig", "加载配置中..."),
    ("syncing", "正在同步到 Claude Code..."),
    ("switched", "模型已切换并同步！"),
    ("langName", "简体中文"),
    ("custom", "自定义"),
    ("checkUpdate", "检查更新"),
    ("checkingUpdate", "正在检查更新..."),
    ("noUpdate", "无可用更新"),
    ("updateAvailable", "发现新版本: "),
    ("downloadNow", "立即下载"),
    ("paste", "粘贴"),
    ("bugReport", "Bug 报告或建议"),
    ("quit", "退出"),
];

const ZH_HANT: &[(&str, &str)] = &[
    ("title", "Claude Code Easy Suite"),
    ("about", "關於"),
    ("manual", "使用說明"),
    ("recoverCC", "恢復CC"),
    ("projectDir", "專案目錄"),
    ("change", "變更"),
    ("yoloMode", "Yolo 模式"),
    ("dangerouslySkip", "(危險：跳過權限檢查)"),
    ("launchBtn", "啟動 Claude Code"),
    ("activeModel", "模型選擇"),
    ("modelSettings", "模型設定"),
    ("modelName", "模型名稱"),
    ("apiKey", "API 金鑰"),
    ("getKey", "獲取API密鑰"),
    ("enterKey", "輸入 API Key"),
    ("apiEndpoint", "API 端點"),
    ("saveChanges", "儲存並關閉"),
    ("saving", "儲存中..."),
    ("saved", "儲存成功！"),
    ("recovering", "正在恢復..."),
    ("recoverSuccess", "恢復成功！"),
    (
        "recoverSuccessAlert",
        "Claude Code 已重置。請注意：不要從本程式啟動。請自行手動打開終端窗口並運行 'claude' 命令以恢復原廠設置。",
    ),
    ("recoverTitle", "恢復 Claude Code"),
    (
        "recoverWarning",
        "警告：這將永久刪除您的 Claude Code 配置和認證令牌。此操作無法撤銷。",
    ),
    ("startRecover", "開始恢復"),
    ("close", "關閉"),
    ("manageProjects", "專案管理"),
    ("projectManagement", "專案管理"),
    ("projectName", "專案名稱"),
    ("delete", "刪除"),
    ("addNewProject", "新增專案"),
    ("projectDirError", "請設置有效的專案目錄！"),
    ("initializing", "初始化中..."),
    ("loadingConfig", "載入設定中..."),
    ("syncing", "正在同步到 Claude Code..."),
    ("switched", "模型已切換並同步！"),
    ("langName", "繁體中文"),
    ("custom", "自定義"),
    ("checkUpdate", "檢查更新"),
    ("checkingUpdate", "正在檢查更新..."),
    ("noUpdate", "無可用更新"),
    ("updateAvailable", "發現新版本: "),
    ("downloadNow", "立即下載"),
    ("paste", "貼上"),
    ("quit", "退出"),
];

// ko/ja/de/fr ship without the update-check strings; those fall back to
// English at lookup time.
const KO: &[(&str, &str)] = &[
    ("title", "Claude Code Easy Suite"),
    ("about", "정보"),
    ("manual", "매뉴얼"),
    ("recoverCC", "CC 초기화"),
    ("projectDir", "프로젝트 디렉토리"),
    ("change", "변경"),
    ("yoloMode", "Yolo 모드"),
    ("dangerouslySkip", "(위험: 권한 확인 건너뛰기)"),
    ("launchBtn", "Claude Code 시작"),
    ("activeModel", "모델 선택"),
    ("modelSettings", "모델 설정"),
    ("modelName", "모델 이름"),
    ("apiKey", "API 키"),
    ("getKey", "API 키 발급"),
    ("enterKey", "API 키 입력"),
    ("apiEndpoint", "API 엔드포인트"),
    ("saveChanges", "저장 및 닫기"),
    ("saving", "저장 중..."),
    ("saved", "저장 성공!"),
    ("recovering", "복구 중..."),
    ("recoverSuccess", "복구 성공!"),
    ("recoverSuccessAlert", "Claude Code가 초기화되었습니다."),
    ("recoverTitle", "Claude Code 초기화"),
    (
        "recoverWarning",
        "경고: Claude Code 설정 및 인증 토큰이 영구적으로 삭제됩니다. 이 작업은 취소할 수 없습니다.",
    ),
    ("startRecover", "초기화 시작"),
    ("close", "닫기"),
    ("manageProjects", "프로젝트 관리"),
    ("projectManagement", "프로젝트 관리"),
    ("projectName", "프로젝트 이름"),
    ("delete", "삭제"),
    ("addNewProject", "새 프로젝트 추가"),
    ("projectDirError", "유효한 프로젝트 디렉토리를 설정해주세요!"),
    ("initializing", "초기화 중..."),
    ("loadingConfig", "설정 불러오는 중..."),
    ("syncing", "Claude Code와 동기화 중..."),
    ("switched", "모델 전환 및 동기화 완료!"),
    ("langName", "한국어"),
    ("custom", "사용자 정의"),
    ("paste", "붙여넣기"),
];

const JA: &[(&str, &str)] = &[
    ("title", "Claude Code Easy Suite"),
    ("about", "バージョン情報"),
    ("manual", "マニュアル"),
    ("recoverCC", "CCを復元"),
    ("projectDir", "プロジェクト・ディレクトリ"),
    ("change", "変更"),
    ("yoloMode", "Yolo モード"),
    ("dangerouslySkip", "(危険：権限チェックをスキップ)"),
    ("launchBtn", "Claude Code を起動"),
    ("activeModel", "モデル選択"),
    ("modelSettings", "モデル設定"),
    ("modelName", "モデル名"),
    ("apiKey", "API キー"),
    ("getKey", "API キーを取得"),
    ("enterKey", "API キーを入力"),
    ("apiEndpoint", "API エンドポイント"),
    ("saveChanges", "保存して閉じる"),
    ("saving", "保存中..."),
    ("saved", "保存しました！"),
    ("recovering", "復元中..."),
    ("recoverSuccess", "復元成功！"),
    ("recoverSuccessAlert", "Claude Code はリセットされました。"),
    ("recoverTitle", "Claude Code の復元"),
    (
        "recoverWarning",
        "警告：Claude Code の設定と認証トークンが完全に削除されます。この操作は取り消せません。",
    ),
    ("startRecover", "復元を開始"),
    ("close", "閉じる"),
    ("manageProjects", "プロジェクト管理"),
    ("projectManagement", "プロジェクト管理"),
    ("projectName", "プロジェクト名"),
    ("delete", "削除"),
    ("addNewProject", "新規プロジェクト追加"),
    ("projectDirError", "有効なプロジェクトディレクトリを設定してください！"),
    ("initializing", "初期化中..."),
    ("loadingConfig", "設定を読み込み中..."),
    ("syncing", "Claude Code に同期中..."),
    ("switched", "モデルの切り替えと同期が完了しました！"),
    ("langName", "日本語"),
    ("custom", "カスタム"),
    ("paste", "貼り付け"),
];

const DE: &[(&str, &str)] = &[
    ("title", "Claude Code Easy Suite"),
    ("about", "Über"),
    ("manual", "Handbuch"),
    ("recoverCC", "CC wiederherstellen"),
    ("projectDir", "Projektverzeichnis"),
    ("change", "Ändern"),
    ("yoloMode", "Yolo-Modus"),
    ("dangerouslySkip", "(Gefahr: Berechtigungen überspringen)"),
    ("launchBtn", "Claude Code starten"),
    ("activeModel", "Aktives Modell"),
    ("modelSettings", "Modell-Einstellungen"),
    ("modelName", "Modellname"),
    ("apiKey", "API-Schlüssel"),
    ("getKey", "API-Schlüssel erhalten"),
    ("enterKey", "API-Schlüssel eingeben"),
    ("apiEndpoint", "API-Endpunkt"),
    ("saveChanges", "Speichern & Schließen"),
    ("saving", "Speichern..."),
    ("saved", "Erfolgreich gespeichert!"),
    ("recovering", "Wiederherstellen..."),
    ("recoverSuccess", "Wiederherstellung erfolgreich!"),
    ("recoverSuccessAlert", "Claude Code wurde zurückgesetzt."),
    ("recoverTitle", "Claude Code wiederherstellen"),
    (
        "recoverWarning",
        "Warnung: Dies löscht Ihre Claude Code-Konfigurationen und Authentifizierungstoken dauerhaft. Diese Aktion kann nicht rückgängig gemacht werden.",
    ),
    ("startRecover", "Wiederherstellung starten"),
    ("close", "Schließen"),
    ("manageProjects", "Projektverwaltung"),
    ("projectManagement", "Projektverwaltung"),
    ("projectName", "Projektname"),
    ("delete", "Löschen"),
    ("addNewProject", "Neues Projekt hinzufügen"),
    ("projectDirError", "Bitte gültiges Projektverzeichnis festlegen!"),
    ("initializing", "Initialisiere..."),
    ("loadingConfig", "Lade Konfiguration..."),
    ("syncing", "Synchronisiere mit Claude Code..."),
    ("switched", "Modell gewechselt & synchronisiert!"),
    ("langName", "Deutsch"),
    ("custom", "Benutzerdefiniert"),
    ("paste", "Einfügen"),
];

const FR: &[(&str, &str)] = &[
    ("title", "Claude Code Easy Suite"),
    ("about", "À propos"),
    ("manual", "Manuel"),
    ("recoverCC", "Récupérer CC"),
    ("projectDir", "Répertoire du projet"),
    ("change", "Changer"),
    ("yoloMode", "Mode Yolo"),
    ("dangerouslySkip", "(Danger : Ignorer les permissions)"),
    ("launchBtn", "Lancer Claude Code"),
    ("activeModel", "Modèle actif"),
    ("modelSettings", "Paramètres du modèle"),
    ("modelName", "Nom du modèle"),
    ("apiKey", "Clé API"),
    ("getKey", "Obtenir une clé API"),
    ("enterKey", "Entrer la clé API"),
    ("apiEndpoint", "Point de terminaison API"),
    ("saveChanges", "Enregistrer et Fermer"),
    ("saving", "Enregistrement..."),
    ("saved", "Enregistré avec succès !"),
    ("recovering", "Récupération..."),
    ("recoverSuccess", "Récupération réussie !"),
    ("recoverSuccessAlert", "Claude Code a été réinitialisé."),
    ("recoverTitle", "Récupérer Claude Code"),
    (
        "recoverWarning",
        "Attention : Cela supprimera définitivement vos configurations et jetons d'authentification Claude Code. Cette action est irréversible.",
    ),
    ("startRecover", "Démarrer la récupération"),
    ("close", "Fermer"),
    ("manageProjects", "Gestion de projet"),
    ("projectManagement", "Gestion de projet"),
    ("projectName", "Nom du projet"),
    ("delete", "Supprimer"),
    ("addNewProject", "Ajouter un nouveau projet"),
    ("projectDirError", "Veuillez définir un répertoire de projet valide !"),
    ("initializing", "Initialisation..."),
    ("loadingConfig", "Chargement de la configuration..."),
    ("syncing", "Synchronisation avec Claude Code..."),
    ("switched", "Modèle changé et synchronisé !"),
    ("langName", "Français"),
    ("custom", "Personnalisé"),
    ("paste", "Coller"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_follows_prefix_table() {
        assert_eq!(detect("zh-TW"), Lang::ZhHant);
        assert_eq!(detect("zh_HK.UTF-8"), Lang::ZhHant);
        assert_eq!(detect("zh-CN"), Lang::ZhHans);
        assert_eq!(detect("zh"), Lang::ZhHans);
        assert_eq!(detect("ko-KR"), Lang::Ko);
        assert_eq!(detect("ja_JP.UTF-8"), Lang::Ja);
        assert_eq!(detect("de-DE"), Lang::De);
        assert_eq!(detect("fr"), Lang::Fr);
        assert_eq!(detect("en-US"), Lang::En);
        assert_eq!(detect("pt-BR"), Lang::En);
        assert_eq!(detect(""), Lang::En);
    }

    #[test]
    fn lookup_prefers_active_language() {
        assert_eq!(tr(Lang::ZhHans, "close"), "关闭");
        assert_eq!(tr(Lang::Fr, "delete"), "Supprimer");
    }

    #[test]
    fn missing_keys_fall_back_to_english_then_key() {
        // ko has no update-check strings
        assert_eq!(tr(Lang::Ko, "checkUpdate"), "Check Update");
        assert_eq!(tr(Lang::Ko, "checkingUpdate"), "Checking for updates...");
        assert_eq!(tr(Lang::Ja, "downloadNow"), "Download Now");
        // unknown key comes back verbatim
        assert_eq!(tr(Lang::En, "noSuchKey"), "noSuchKey");
        assert_eq!(tr(Lang::De, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn every_language_names_itself() {
        for lang in Lang::ALL {
            assert!(!tr(lang, "langName").is_empty());
        }
    }
}
