//! End-to-end generation tests
//!
//! Drives `CrudGenerator` over a YAML model catalog and checks the rendered
//! controller, search model and views for both template sets.

use crudkit_codegen::{
    generate_and_write, CodeFile, CrudGenerator, FileOperation, GeneratorOptions, Syntax, Widget,
};
use crudkit_core::{CoreError, ModelCatalog};
use std::path::Path;

const CATALOG: &str = r#"
models:
  - class: app\models\Post
    table:
      name: post
      columns:
        - { name: id, type: integer, pk: true }
        - { name: title, type: string, size: 255 }
        - { name: body, type: text }
        - { name: status, type: string, size: 16, enum_values: [draft, published_at] }
        - { name: is_pinned, type: boolean }
        - { name: created_time, type: integer }
  - class: app\models\PostTag
    table:
      name: post_tag
      columns:
        - { name: post_id, type: integer, pk: true }
        - { name: tag_id, type: integer, pk: true }
  - class: app\models\Session
    backend: document
    primary_key: [_id]
    attributes: [_id, user, password]
  - class: app\models\Broken
    table:
      name: broken
      columns:
        - { name: note, type: string }
"#;

fn catalog() -> ModelCatalog {
    ModelCatalog::from_yaml(CATALOG).unwrap()
}

fn post_options(root: &Path) -> GeneratorOptions {
    GeneratorOptions::new("app\\models\\Post", "app\\controllers\\PostController")
        .with_search_model("app\\models\\PostSearch")
        .with_output_root(root)
}

fn file<'a>(files: &'a [CodeFile], root: &Path, relative: &str) -> &'a str {
    let path = root.join(relative);
    files
        .iter()
        .find(|f| f.path == path)
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("{} was not generated", relative))
}

#[test]
fn test_file_set_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = post_options(dir.path());
    let files = CrudGenerator::new(&catalog, &options).unwrap().generate().unwrap();

    let paths: Vec<_> = files
        .iter()
        .map(|f| f.path.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        paths,
        vec![
            "app/controllers/PostController.php",
            "app/models/PostSearch.php",
            "views/post/_form.php",
            "views/post/_search.php",
            "views/post/create.php",
            "views/post/index.php",
            "views/post/update.php",
            "views/post/view.php",
        ]
    );
    assert!(files.iter().all(|f| f.operation == FileOperation::Create));
}

#[test]
fn test_controller_with_search_model() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = post_options(dir.path());
    let files = CrudGenerator::new(&catalog, &options).unwrap().generate().unwrap();
    let controller = file(&files, dir.path(), "app/controllers/PostController.php");

    assert!(controller.contains("namespace app\\controllers;"));
    assert!(controller.contains("use app\\models\\PostSearch;"));
    assert!(!controller.contains("ActiveDataProvider"));
    assert!(controller.contains("class PostController extends Controller"));
    assert!(controller.contains("$searchModel = new PostSearch();"));
    assert!(controller.contains("* @param integer $id"));
    assert!(controller.contains("public function actionView($id)"));
    assert!(controller.contains("return $this->redirect(['view', 'id' => $model->id]);"));
    assert!(controller.contains("($model = Post::findOne($id)) !== null"));
    assert!(controller.contains("return $this->render('index', ["));
}

#[test]
fn test_form_view_widgets() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = post_options(dir.path());
    let files = CrudGenerator::new(&catalog, &options).unwrap().generate().unwrap();
    let form = file(&files, dir.path(), "views/post/_form.php");

    assert!(form.contains("<div class=\"post-form\">"));
    assert!(form.contains("<?= $form->field($model, 'id')->textInput() ?>"));
    assert!(form.contains("<?= $form->field($model, 'title')->textInput(['maxlength' => true]) ?>"));
    assert!(form.contains("<?= $form->field($model, 'body')->textarea(['rows' => 6]) ?>"));
    assert!(form.contains(
        "<?= $form->field($model, 'status')->dropDownList(['draft' => 'Draft', 'published_at' => 'Published at'], ['prompt' => '']) ?>"
    ));
    assert!(form.contains("<?= $form->field($model, 'is_pinned')->checkbox() ?>"));

    let title = form.find("'title'").unwrap();
    let body = form.find("'body'").unwrap();
    assert!(title < body);
}

#[test]
fn test_search_view_and_model() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = post_options(dir.path());
    let files = CrudGenerator::new(&catalog, &options).unwrap().generate().unwrap();

    let search_view = file(&files, dir.path(), "views/post/_search.php");
    assert!(search_view.contains("<?= $form->field($model, 'title') ?>"));
    assert!(search_view.contains("<?= $form->field($model, 'is_pinned')->checkbox() ?>"));
    assert!(search_view.contains("<?php // echo $form->field($model, 'created_time') ?>"));
    assert!(!search_view.contains("textarea"));

    let search_model = file(&files, dir.path(), "app/models/PostSearch.php");
    assert!(search_model.contains("namespace app\\models;"));
    assert!(search_model.contains("use app\\models\\Post;"));
    assert!(search_model.contains("class PostSearch extends Post"));
    assert!(search_model.contains("[['id', 'created_time'], 'integer'],"));
    assert!(search_model.contains("[['title', 'body', 'status'], 'safe'],"));
    assert!(search_model.contains("[['is_pinned'], 'boolean'],"));
    assert!(search_model.contains("'is_pinned' => $this->is_pinned,"));
    assert!(search_model.contains("->andFilterWhere(['like', 'title', $this->title])"));
}

#[test]
fn test_index_and_detail_views() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = post_options(dir.path());
    let files = CrudGenerator::new(&catalog, &options).unwrap().generate().unwrap();

    let index = file(&files, dir.path(), "views/post/index.php");
    assert!(index.contains("$this->title = 'Posts';"));
    assert!(index.contains("'filterModel' => $searchModel,"));
    assert!(index.contains("['class' => 'yii\\grid\\SerialColumn'],\n            'id',\n"));
    assert!(index.contains("            'body:ntext',"));
    assert!(index.contains("            'is_pinned:boolean',"));
    assert!(index.contains("            // 'created_time:datetime',"));

    let view = file(&files, dir.path(), "views/post/view.php");
    assert!(view.contains("$this->title = $model->title;"));
    assert!(view.contains("Html::a('Update', ['update', 'id' => $model->id]"));
    assert!(view.contains("Html::a('Delete', ['delete', 'id' => $model->id]"));
    assert!(view.contains("            'created_time:datetime',"));

    let update = file(&files, dir.path(), "views/post/update.php");
    assert!(update.contains("$this->title = 'Update Post: ' . $model->title;"));
    assert!(update.contains("['label' => $model->title, 'url' => ['view', 'id' => $model->id]]"));
}

#[test]
fn test_twig_template_set() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = post_options(dir.path()).with_syntax(Syntax::Twig);
    let files = CrudGenerator::new(&catalog, &options).unwrap().generate().unwrap();

    assert!(files.iter().any(|f| f.path == dir.path().join("views/post/index.twig")));
    assert!(!files.iter().any(|f| f.path.extension().is_some_and(|e| e == "php")
        && f.path.starts_with(dir.path().join("views"))));

    let controller = file(&files, dir.path(), "app/controllers/PostController.php");
    assert!(controller.contains("return $this->render('view.twig', ["));
    assert!(controller.contains("return $this->redirect(['view', 'id' => $model->id]);"));

    let view = file(&files, dir.path(), "views/post/view.twig");
    assert!(view.contains("path('post/update', { 'id': model.id })"));
    assert!(view.contains("{{ set(this, 'title', model.title) }}"));

    let form = file(&files, dir.path(), "views/post/_form.twig");
    assert!(form.contains("{{ form.field(model, 'body').textarea({'rows': 6}) | raw }}"));
    assert!(form.contains("{{ form.field(model, 'title').textInput({'maxlength': true}) | raw }}"));
    assert!(form.contains("{% set form = active_form_begin() %}"));

    let index = file(&files, dir.path(), "views/post/index.twig");
    assert!(index.contains("{'class': 'yii\\\\grid\\\\SerialColumn'},\n            'id',\n"));
    assert!(!index.contains("created_time"));

    let search = file(&files, dir.path(), "views/post/_search.twig");
    assert!(search.contains("{# {{ form.field(model, 'created_time') | raw }} #}"));
}

#[test]
fn test_composite_key_without_search_model() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = GeneratorOptions::new("app\\models\\PostTag", "app\\controllers\\PostTagController")
        .with_output_root(dir.path());
    let generator = CrudGenerator::new(&catalog, &options).unwrap();
    assert_eq!(generator.controller_id(), "post-tag");

    let files = generator.generate().unwrap();
    assert_eq!(files.len(), 6);
    assert!(!files.iter().any(|f| f.path.ends_with("_search.php")));

    let controller = file(&files, dir.path(), "app/controllers/PostTagController.php");
    assert!(controller.contains("use yii\\data\\ActiveDataProvider;"));
    assert!(controller.contains("'query' => PostTag::find(),"));
    assert!(controller.contains("public function actionUpdate($post_id, $tag_id)"));
    assert!(controller.contains("* @param integer $tag_id"));
    assert!(controller.contains("PostTag::findOne(['post_id' => $post_id, 'tag_id' => $tag_id])"));
    assert!(controller.contains(
        "return $this->redirect(['view', 'post_id' => $model->post_id, 'tag_id' => $model->tag_id]);"
    ));

    let index = file(&files, dir.path(), "views/post-tag/index.php");
    assert!(!index.contains("_search"));
    assert!(!index.contains("filterModel"));

    let view = file(&files, dir.path(), "views/post-tag/view.php");
    assert!(view.contains("$this->title = $model->post_id;"));
}

#[test]
fn test_document_store_without_table() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = GeneratorOptions::new("app\\models\\Session", "app\\controllers\\SessionController")
        .with_search_model("app\\models\\SessionSearch")
        .with_output_root(dir.path());
    let generator = CrudGenerator::new(&catalog, &options).unwrap();

    assert_eq!(
        generator.generate_url_params(Syntax::Php).unwrap(),
        "'id' => (string)$model->_id"
    );
    assert_eq!(
        generator.generate_url_params(Syntax::Twig).unwrap(),
        "'id': model._id"
    );
    assert_eq!(generator.generate_action_param_comments(), vec!["@param string $id"]);

    let files = generator.generate().unwrap();
    let form = file(&files, dir.path(), "views/session/_form.php");
    assert!(form.contains("<?= $form->field($model, '_id') ?>"));
    assert!(form.contains("<?= $form->field($model, 'password')->passwordInput() ?>"));

    let search_view = file(&files, dir.path(), "views/session/_search.php");
    assert!(search_view.contains("<?= $form->field($model, 'password') ?>"));

    let search_model = file(&files, dir.path(), "app/models/SessionSearch.php");
    assert!(search_model.contains("[['_id', 'user', 'password'], 'safe'],"));
    assert!(!search_model.contains("$query->andFilterWhere(["));
    assert!(search_model.contains("->andFilterWhere(['like', '_id', $this->_id])"));

    let controller = file(&files, dir.path(), "app/controllers/SessionController.php");
    assert!(controller.contains("return $this->redirect(['view', 'id' => (string)$model->_id]);"));
}

#[test]
fn test_search_model_sharing_basename() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = GeneratorOptions::new("app\\models\\Post", "app\\controllers\\PostController")
        .with_search_model("app\\models\\search\\Post")
        .with_output_root(dir.path());
    let files = CrudGenerator::new(&catalog, &options).unwrap().generate().unwrap();

    let controller = file(&files, dir.path(), "app/controllers/PostController.php");
    assert!(controller.contains("use app\\models\\search\\Post as PostSearch;"));
    assert!(controller.contains("$searchModel = new PostSearch();"));

    let search_model = file(&files, dir.path(), "app/models/search/Post.php");
    assert!(search_model.contains("namespace app\\models\\search;"));
    assert!(search_model.contains("use app\\models\\Post as PostModel;"));
    assert!(search_model.contains("class Post extends PostModel"));
    assert!(search_model.contains("$query = PostModel::find();"));
}

#[test]
fn test_field_reports() {
    let catalog = catalog();
    let options = GeneratorOptions::new("app\\models\\Session", "app\\controllers\\SessionController");
    let generator = CrudGenerator::new(&catalog, &options).unwrap();

    let reports = generator.field_reports();
    let names: Vec<_> = reports.iter().map(|r| r.attribute.as_str()).collect();
    assert_eq!(names, vec!["_id", "user", "password"]);

    let password = &reports[2];
    assert!(!password.has_column);
    assert_eq!(password.form.widget, Widget::PasswordInput);
    assert_eq!(password.search.widget, Widget::Generic);
    assert_eq!(password.search_code, "$form->field($model, 'password')");
}

#[test]
fn test_model_errors() {
    let catalog = catalog();

    let options = GeneratorOptions::new("app\\models\\Missing", "app\\controllers\\MissingController");
    let err = CrudGenerator::new(&catalog, &options).err().unwrap();
    assert!(matches!(err, CoreError::UnknownModel { ref class } if class == "app\\models\\Missing"));

    let options = GeneratorOptions::new("app\\models\\Broken", "app\\controllers\\BrokenController");
    let err = CrudGenerator::new(&catalog, &options).err().unwrap();
    assert!(matches!(err, CoreError::InvalidKeySet { ref model } if model.as_deref() == Some("app\\models\\Broken")));
    assert!(err.is_model_error());

    let options = GeneratorOptions::new("app\\models\\Post", "app\\controllers\\Posts");
    let err = CrudGenerator::new(&catalog, &options).err().unwrap();
    assert!(err.is_validation());
}

#[test]
fn test_generate_and_write_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = post_options(dir.path());

    let first = generate_and_write(&catalog, &options, false).unwrap();
    assert_eq!(first.len(), 8);
    assert!(first.iter().all(|(_, written)| *written));
    assert!(dir.path().join("views/post/view.php").exists());

    let second = generate_and_write(&catalog, &options, false).unwrap();
    assert!(second
        .iter()
        .all(|(file, written)| file.operation == FileOperation::Skip && !written));
}

#[test]
fn test_modified_files_are_kept_without_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog();
    let options = post_options(dir.path());
    generate_and_write(&catalog, &options, false).unwrap();

    let view = dir.path().join("views/post/view.php");
    std::fs::write(&view, "customised").unwrap();

    let kept = generate_and_write(&catalog, &options, false).unwrap();
    let (file, written) = kept.iter().find(|(f, _)| f.path == view).unwrap();
    assert_eq!(file.operation, FileOperation::Overwrite);
    assert!(!written);
    assert_eq!(std::fs::read_to_string(&view).unwrap(), "customised");

    generate_and_write(&catalog, &options, true).unwrap();
    assert_ne!(std::fs::read_to_string(&view).unwrap(), "customised");
}
