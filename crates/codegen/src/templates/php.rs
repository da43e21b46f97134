//! Controller, search model and the `default` (plain PHP) view set.

pub static CONTROLLER_TEMPLATE: &str = r#"<?php

namespace {{ controller_namespace }};

use Yii;
use {{ model_class }};
{%- if search_model_class %}
use {{ search_model_use }};
{%- else %}
use yii\data\ActiveDataProvider;
{%- endif %}
use {{ base_controller_class }};
use yii\web\NotFoundHttpException;
use yii\filters\VerbFilter;

/**
 * {{ controller_basename }} implements the CRUD actions for {{ model_basename }} model.
 */
class {{ controller_basename }} extends {{ base_controller_basename }}
{
    /**
     * @inheritdoc
     */
    public function behaviors()
    {
        return [
            'verbs' => [
                'class' => VerbFilter::className(),
                'actions' => [
                    'delete' => ['POST'],
                ],
            ],
        ];
    }

    /**
     * Lists all {{ model_basename }} models.
     * @return mixed
     */
    public function actionIndex()
    {
{%- if search_model_class %}
        $searchModel = new {{ search_model_name }}();
        $dataProvider = $searchModel->search(Yii::$app->request->queryParams);

        return $this->render('index{{ view_suffix }}', [
            'searchModel' => $searchModel,
            'dataProvider' => $dataProvider,
        ]);
{%- else %}
        $dataProvider = new ActiveDataProvider([
            'query' => {{ model_basename }}::find(),
        ]);

        return $this->render('index{{ view_suffix }}', [
            'dataProvider' => $dataProvider,
        ]);
{%- endif %}
    }

    /**
     * Displays a single {{ model_basename }} model.
{%- for comment in action_param_comments %}
     * {{ comment }}
{%- endfor %}
     * @return mixed
     */
    public function actionView({{ action_params }})
    {
        return $this->render('view{{ view_suffix }}', [
            'model' => $this->findModel({{ action_params }}),
        ]);
    }

    /**
     * Creates a new {{ model_basename }} model.
     * If creation is successful, the browser will be redirected to the 'view' page.
     * @return mixed
     */
    public function actionCreate()
    {
        $model = new {{ model_basename }}();

        if ($model->load(Yii::$app->request->post()) && $model->save()) {
            return $this->redirect(['view', {{ controller_url_params }}]);
        }

        return $this->render('create{{ view_suffix }}', [
            'model' => $model,
        ]);
    }

    /**
     * Updates an existing {{ model_basename }} model.
     * If update is successful, the browser will be redirected to the 'view' page.
{%- for comment in action_param_comments %}
     * {{ comment }}
{%- endfor %}
     * @return mixed
     */
    public function actionUpdate({{ action_params }})
    {
        $model = $this->findModel({{ action_params }});

        if ($model->load(Yii::$app->request->post()) && $model->save()) {
            return $this->redirect(['view', {{ controller_url_params }}]);
        }

        return $this->render('update{{ view_suffix }}', [
            'model' => $model,
        ]);
    }

    /**
     * Deletes an existing {{ model_basename }} model.
     * If deletion is successful, the browser will be redirected to the 'index' page.
{%- for comment in action_param_comments %}
     * {{ comment }}
{%- endfor %}
     * @return mixed
     */
    public function actionDelete({{ action_params }})
    {
        $this->findModel({{ action_params }})->delete();

        return $this->redirect(['index']);
    }

    /**
     * Finds the {{ model_basename }} model based on its primary key value.
     * If the model is not found, a 404 HTTP exception will be thrown.
{%- for comment in action_param_comments %}
     * {{ comment }}
{%- endfor %}
     * @return {{ model_basename }} the loaded model
     * @throws NotFoundHttpException if the model cannot be found
     */
    protected function findModel({{ action_params }})
    {
        if (($model = {{ model_basename }}::findOne({{ find_condition }})) !== null) {
            return $model;
        }

        throw new NotFoundHttpException('The requested page does not exist.');
    }
}
"#;

pub static SEARCH_TEMPLATE: &str = r#"<?php

namespace {{ search_model_namespace }};

use Yii;
use yii\base\Model;
use yii\data\ActiveDataProvider;
use {{ model_class }}{% if model_alias %} as {{ model_alias }}{% endif %};

/**
 * {{ search_model_basename }} represents the model behind the search form about `{{ model_class }}`.
 */
class {{ search_model_basename }} extends {{ model_reference }}
{
    /**
     * @inheritdoc
     */
    public function rules()
    {
        return [
{%- for rule in search_rules %}
            {{ rule }},
{%- endfor %}
        ];
    }

    /**
     * @inheritdoc
     */
    public function scenarios()
    {
        // bypass scenarios() implementation in the parent class
        return Model::scenarios();
    }

    /**
     * Creates data provider instance with search query applied
     *
     * @param array $params
     *
     * @return ActiveDataProvider
     */
    public function search($params)
    {
        $query = {{ model_reference }}::find();

        $dataProvider = new ActiveDataProvider([
            'query' => $query,
        ]);

        $this->load($params);

        if (!$this->validate()) {
            // uncomment the following line if you do not want to return any records when validation fails
            // $query->where('0=1');
            return $dataProvider;
        }
{%- if hash_conditions %}

        $query->andFilterWhere([
{%- for condition in hash_conditions %}
            {{ condition }},
{%- endfor %}
        ]);
{%- endif %}
{%- if like_conditions %}

        $query
{%- for condition in like_conditions %}
            ->andFilterWhere({{ condition }})
{%- endfor %};
{%- endif %}

        return $dataProvider;
    }
}
"#;

pub static FORM_VIEW: &str = r#"<?php

use yii\helpers\Html;
use yii\widgets\ActiveForm;

/* @var $this yii\web\View */
/* @var $model {{ model_class }} */
/* @var $form yii\widgets\ActiveForm */
?>

<div class="{{ css_id }}-form">

    <?php $form = ActiveForm::begin(); ?>
{%- for field in form_fields %}

    {{ field }}
{%- endfor %}

    <div class="form-group">
        <?= Html::submitButton('Save', ['class' => 'btn btn-success']) ?>
    </div>

    <?php ActiveForm::end(); ?>

</div>
"#;

pub static SEARCH_VIEW: &str = r#"<?php

use yii\helpers\Html;
use yii\widgets\ActiveForm;

/* @var $this yii\web\View */
/* @var $model {{ search_model_class }} */
/* @var $form yii\widgets\ActiveForm */
?>

<div class="{{ css_id }}-search">

    <?php $form = ActiveForm::begin([
        'action' => ['index'],
        'method' => 'get',
    ]); ?>
{%- for field in search_fields %}

    {{ field }}
{%- endfor %}

    <div class="form-group">
        <?= Html::submitButton('Search', ['class' => 'btn btn-primary']) ?>
        <?= Html::resetButton('Reset', ['class' => 'btn btn-default']) ?>
    </div>

    <?php ActiveForm::end(); ?>

</div>
"#;

pub static CREATE_VIEW: &str = r#"<?php

use yii\helpers\Html;

/* @var $this yii\web\View */
/* @var $model {{ model_class }} */

$this->title = 'Create {{ model_title }}';
$this->params['breadcrumbs'][] = ['label' => '{{ model_title_plural }}', 'url' => ['index']];
$this->params['breadcrumbs'][] = $this->title;
?>
<div class="{{ css_id }}-create">

    <h1><?= Html::encode($this->title) ?></h1>

    <?= $this->render('_form', [
        'model' => $model,
    ]) ?>

</div>
"#;

pub static INDEX_VIEW: &str = r#"<?php

use yii\helpers\Html;
use yii\grid\GridView;

/* @var $this yii\web\View */
{%- if search_model_class %}
/* @var $searchModel {{ search_model_class }} */
{%- endif %}
/* @var $dataProvider yii\data\ActiveDataProvider */

$this->title = '{{ model_title_plural }}';
$this->params['breadcrumbs'][] = $this->title;
?>
<div class="{{ css_id }}-index">

    <h1><?= Html::encode($this->title) ?></h1>
{%- if search_model_class %}
    <?php // echo $this->render('_search', ['model' => $searchModel]); ?>
{%- endif %}

    <p>
        <?= Html::a('Create {{ model_title }}', ['create'], ['class' => 'btn btn-success']) ?>
    </p>

    <?= GridView::widget([
        'dataProvider' => $dataProvider,
{%- if search_model_class %}
        'filterModel' => $searchModel,
{%- endif %}
        'columns' => [
            ['class' => 'yii\grid\SerialColumn'],
{%- for column in grid_columns %}
            {% if not column.active %}// {% endif %}{{ column.code }},
{%- endfor %}

            ['class' => 'yii\grid\ActionColumn'],
        ],
    ]); ?>
</div>
"#;

pub static UPDATE_VIEW: &str = r#"<?php

use yii\helpers\Html;

/* @var $this yii\web\View */
/* @var $model {{ model_class }} */

$this->title = 'Update {{ model_title }}: ' . {{ name_access }};
$this->params['breadcrumbs'][] = ['label' => '{{ model_title_plural }}', 'url' => ['index']];
$this->params['breadcrumbs'][] = ['label' => {{ name_access }}, 'url' => ['view', {{ url_params }}]];
$this->params['breadcrumbs'][] = 'Update';
?>
<div class="{{ css_id }}-update">

    <h1><?= Html::encode($this->title) ?></h1>

    <?= $this->render('_form', [
        'model' => $model,
    ]) ?>

</div>
"#;

pub static VIEW_VIEW: &str = r#"<?php

use yii\helpers\Html;
use yii\widgets\DetailView;

/* @var $this yii\web\View */
/* @var $model {{ model_class }} */

$this->title = {{ name_access }};
$this->params['breadcrumbs'][] = ['label' => '{{ model_title_plural }}', 'url' => ['index']];
$this->params['breadcrumbs'][] = $this->title;
?>
<div class="{{ css_id }}-view">

    <h1><?= Html::encode($this->title) ?></h1>

    <p>
        <?= Html::a('Update', ['update', {{ url_params }}], ['class' => 'btn btn-primary']) ?>
        <?= Html::a('Delete', ['delete', {{ url_params }}], [
            'class' => 'btn btn-danger',
            'data' => [
                'confirm' => 'Are you sure you want to delete this item?',
                'method' => 'post',
            ],
        ]) ?>
    </p>

    <?= DetailView::widget([
        'model' => $model,
        'attributes' => [
{%- for attribute in detail_attributes %}
            {{ attribute }},
{%- endfor %}
        ],
    ]) ?>

</div>
"#;
